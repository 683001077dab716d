use serde::Deserialize;

/// The upstream image object: one URL per size variant, any of which
/// may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageVariants {
    pub original: Option<String>,
    pub super_url: Option<String>,
    pub medium_url: Option<String>,
    pub small_url: Option<String>,
    pub square_medium: Option<String>,
    pub square_small: Option<String>,
    pub thumb_url: Option<String>,
    pub tiny_url: Option<String>,
}

/// Picks the best available variant. The order encodes the upstream's
/// quality ladder and must not be reshuffled.
pub fn pick_image(image: Option<&ImageVariants>) -> Option<String> {
    let img = image?;
    [
        &img.original,
        &img.super_url,
        &img.medium_url,
        &img.small_url,
        &img.square_medium,
        &img.square_small,
        &img.thumb_url,
        &img.tiny_url,
    ]
    .into_iter()
    .find_map(|v| v.as_deref().filter(|u| !u.is_empty()).map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants_from_mask(mask: u32) -> ImageVariants {
        let value = |i: usize| {
            if mask & (1 << i) != 0 {
                Some(format!("https://img.example/{i}.jpg"))
            } else {
                None
            }
        };
        ImageVariants {
            original: value(0),
            super_url: value(1),
            medium_url: value(2),
            small_url: value(3),
            square_medium: value(4),
            square_small: value(5),
            thumb_url: value(6),
            tiny_url: value(7),
        }
    }

    #[test]
    fn first_present_variant_wins_for_every_combination() {
        for mask in 0u32..256 {
            let img = variants_from_mask(mask);
            let expected = (0..8)
                .find(|i| mask & (1 << i) != 0)
                .map(|i| format!("https://img.example/{i}.jpg"));
            assert_eq!(pick_image(Some(&img)), expected, "mask {mask:#010b}");
        }
    }

    #[test]
    fn missing_image_object_yields_none() {
        assert_eq!(pick_image(None), None);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let img = ImageVariants {
            original: Some(String::new()),
            medium_url: Some("https://img.example/m.jpg".into()),
            ..Default::default()
        };
        assert_eq!(pick_image(Some(&img)).as_deref(), Some("https://img.example/m.jpg"));
    }
}
