pub fn parse_date(input: &str) -> Result<jiff::civil::Date, String> {
    input
        .parse::<jiff::civil::Date>()
        .map_err(|error| format!("Invalid date: {error}"))
}
