use crate::searches::Coordinates;

/// Flat approximation used for the search window, regardless of latitude.
pub const METERS_PER_DEGREE: f64 = 111_000.0;
pub const BUSINESS_TYPE: &str = "biz";
pub const DEFAULT_RESULTS: u32 = 50;

pub type QueryParams = Vec<(String, String)>;

pub fn span_degrees(radius_m: u32) -> f64 {
    radius_m as f64 / METERS_PER_DEGREE
}

/// The `spn` value: the same span for both axes, six decimals.
pub fn format_span(radius_m: u32) -> String {
    let span = span_degrees(radius_m);
    format!("{:.6},{:.6}", span, span)
}

pub fn query_search(query: &str, center: Coordinates, radius_m: u32) -> QueryParams {
    vec![
        ("ll".to_string(), center.to_ll()),
        ("spn".to_string(), format_span(radius_m)),
        ("text".to_string(), query.to_string()),
        ("type".to_string(), BUSINESS_TYPE.to_string()),
        ("results".to_string(), DEFAULT_RESULTS.to_string()),
    ]
}

pub fn coordinate_search(center: Coordinates, radius_m: u32, results: u32) -> QueryParams {
    vec![
        ("ll".to_string(), center.to_ll()),
        ("spn".to_string(), format_span(radius_m)),
        ("results".to_string(), results.to_string()),
        ("type".to_string(), BUSINESS_TYPE.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn span_uses_fixed_meters_per_degree() {
        assert_eq!(format_span(1000), "0.009009,0.009009");
        assert_eq!(format_span(2000), "0.018018,0.018018");
        assert_eq!(format_span(0), "0.000000,0.000000");
    }

    #[test]
    fn query_search_carries_text() {
        let params = query_search("coffee", Coordinates::new(55.75, 37.61), 2000);
        assert_eq!(get(&params, "ll"), Some("37.61,55.75"));
        assert_eq!(get(&params, "text"), Some("coffee"));
        assert_eq!(get(&params, "type"), Some("biz"));
        assert_eq!(get(&params, "results"), Some("50"));
    }

    #[test]
    fn coordinate_search_has_no_text() {
        let params = coordinate_search(Coordinates::new(55.75, 37.61), 500, 20);
        assert_eq!(get(&params, "text"), None);
        assert_eq!(get(&params, "results"), Some("20"));
        assert_eq!(get(&params, "spn"), Some("0.004505,0.004505"));
    }
}
