use anyhow::Result;
use log::error;
use plotters::prelude::RGBColor;

pub fn get_color_from_label(label: &str) -> Result<RGBColor> {
    match label {
        "light-red" => Ok(RGBColor(255, 153, 153)),
        "light-green" => Ok(RGBColor(144, 238, 144)),
        "light-blue" => Ok(RGBColor(174, 214, 241)),
        "red" => Ok(RGBColor(231, 76, 60)),
        "green" => Ok(RGBColor(39, 174, 96)),
        "yellow" => Ok(RGBColor(247, 220, 111)),
        _ => {
            error!("unrecognized label for color (label={label})");
            anyhow::bail!("unrecognized label (label={label})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(get_color_from_label("light-red").unwrap(), RGBColor(0xFF, 0x99, 0x99));
        assert_eq!(get_color_from_label("green").unwrap(), RGBColor(0x27, 0xAE, 0x60));
        assert_eq!(get_color_from_label("yellow").unwrap(), RGBColor(0xF7, 0xDC, 0x6F));
    }

    #[test]
    fn test_unknown_label() {
        assert!(get_color_from_label("dark-red").is_err());
    }
}
