use crate::model::{CoffeeEntry, BLONDE_ROAST, DARK_ROAST, MEDIUM_ROAST};

struct Sample {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    details: &'static str,
    origin: &'static str,
    body: &'static str,
    acidity: &'static str,
    processing: &'static str,
    food_pairing: &'static str,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        name: "Sunsera Blend",
        description: "Smooth and sweet with notes of zesty bright citrus and toasted almond.",
        category: BLONDE_ROAST,
        details: "Crafted for lovers of smooth, flavorful, easy-drinking coffee.",
        origin: "Brazil & Colombia",
        body: "Medium-Light",
        acidity: "Medium",
        processing: "Washed + Sun Dried",
        food_pairing: "Blueberry Streusel Muffin",
    },
    Sample {
        name: "Veranda Blend",
        description: "A mellow, lighter-bodied coffee.",
        category: BLONDE_ROAST,
        details: "Soft and balanced with delicate nuances of lightly roasted nuts.",
        origin: "Latin America",
        body: "Light",
        acidity: "Mild",
        processing: "Washed",
        food_pairing: "Banana Nut Bread",
    },
    Sample {
        name: "Blonde Espresso Roast",
        description: "A soft, beautifully balanced flavor profile that pairs perfectly with milk and nondairy alternatives.",
        category: BLONDE_ROAST,
        details: "Experience the lighter side of espresso. Made up of select Latin American and East African beans, this blend is delicious served hot or over ice.",
        origin: "Latin America",
        body: "Light",
        acidity: "Mild",
        processing: "Washed",
        food_pairing: "Iced Lemon Loaf, Cinnamon Coffee Cake",
    },
    Sample {
        name: "Pike Place Roast",
        description: "Smooth, well-rounded blend.",
        category: MEDIUM_ROAST,
        details: "Subtle notes of cocoa and toasted nuts.",
        origin: "Latin America",
        body: "Medium",
        acidity: "Medium",
        processing: "Washed",
        food_pairing: "Chocolate Croissant",
    },
    Sample {
        name: "French Roast",
        description: "Intense, smoky, dark roast.",
        category: DARK_ROAST,
        details: "Bold and full-bodied with a roasty edge.",
        origin: "Multi-region blend",
        body: "Full",
        acidity: "Low",
        processing: "Varied",
        food_pairing: "Chocolate Chip Cookie",
    },
];

/// The sample coffees a fresh collection starts with. Each call mints new ids.
pub fn sample_coffees() -> Vec<CoffeeEntry> {
    SAMPLES
        .iter()
        .map(|s| {
            let mut entry = CoffeeEntry::new(
                s.name,
                s.description,
                s.category,
                Some(s.details.to_string()),
                None,
            );
            entry.origin = Some(s.origin.to_string());
            entry.body = Some(s.body.to_string());
            entry.acidity = Some(s.acidity.to_string());
            entry.processing = Some(s.processing.to_string());
            entry.food_pairing = Some(s.food_pairing.to_string());
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn five_untasted_samples_with_full_profiles() {
        let samples = sample_coffees();
        assert_eq!(samples.len(), 5);
        for entry in &samples {
            assert!(!entry.tasted);
            assert!(!entry.is_favorite);
            assert!(entry.origin.is_some());
            assert!(entry.body.is_some());
            assert!(entry.acidity.is_some());
            assert!(entry.processing.is_some());
            assert!(entry.food_pairing.is_some());
        }
    }

    #[test]
    fn sample_ids_are_unique() {
        let samples = sample_coffees();
        let ids: HashSet<_> = samples.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), samples.len());
    }

    #[test]
    fn samples_keep_their_order() {
        let names: Vec<String> = sample_coffees().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Sunsera Blend",
                "Veranda Blend",
                "Blonde Espresso Roast",
                "Pike Place Roast",
                "French Roast"
            ]
        );
    }
}
