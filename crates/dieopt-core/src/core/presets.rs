use phf::{Map, phf_map};

/// Standard wafer diameters in mm, addressable by imperial or metric size name.
static WAFER_DIAMETERS_MM: Map<&'static str, f64> = phf_map! {
    "2in" => 50.8,
    "3in" => 76.2,
    "4in" => 100.0,
    "5in" => 125.0,
    "6in" => 150.0,
    "8in" => 200.0,
    "12in" => 300.0,
    "100mm" => 100.0,
    "125mm" => 125.0,
    "150mm" => 150.0,
    "200mm" => 200.0,
    "300mm" => 300.0,
    "450mm" => 450.0,
};

pub fn diameter_of(name: &str) -> Option<f64> {
    let normalized = name.trim().to_ascii_lowercase();
    WAFER_DIAMETERS_MM.get(normalized.as_str()).copied()
}

/// All presets, ordered by diameter and then by name.
pub fn all() -> Vec<(&'static str, f64)> {
    let mut presets: Vec<_> = WAFER_DIAMETERS_MM
        .entries()
        .map(|(name, diameter)| (*name, *diameter))
        .collect();
    presets.sort_by(|(name_a, dia_a), (name_b, dia_b)| {
        dia_a.total_cmp(dia_b).then_with(|| name_a.cmp(name_b))
    });
    presets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diameter_of_resolves_imperial_and_metric_names() {
        assert_eq!(diameter_of("2in"), Some(50.8));
        assert_eq!(diameter_of("300mm"), Some(300.0));
        assert_eq!(diameter_of("12in"), Some(300.0));
    }

    #[test]
    fn diameter_of_ignores_case_and_surrounding_whitespace() {
        assert_eq!(diameter_of(" 8IN "), Some(200.0));
    }

    #[test]
    fn diameter_of_returns_none_for_unknown_name() {
        assert_eq!(diameter_of("9in"), None);
        assert_eq!(diameter_of(""), None);
    }

    #[test]
    fn all_is_sorted_by_diameter_then_name() {
        let presets = all();
        assert_eq!(presets.len(), 13);
        assert_eq!(presets.first(), Some(&("2in", 50.8)));
        assert_eq!(presets.last(), Some(&("450mm", 450.0)));
        assert!(presets.windows(2).all(|w| w[0].1 <= w[1].1));

        let at_100: Vec<_> = presets.iter().filter(|(_, d)| *d == 100.0).collect();
        assert_eq!(at_100, vec![&("100mm", 100.0), &("4in", 100.0)]);
    }
}
