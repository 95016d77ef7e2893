/// Value following `flag` in `args`, e.g. `--output openapi.json`.
pub fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn finds_value_after_flag() {
        let args = args(&["post_readings", "--input", "batch.json", "--url", "http://x/data"]);
        assert_eq!(arg_value(&args, "--input"), Some("batch.json"));
        assert_eq!(arg_value(&args, "--url"), Some("http://x/data"));
    }

    #[test]
    fn missing_flag_or_trailing_flag_is_none() {
        let args = args(&["generate_openapi", "--output"]);
        assert_eq!(arg_value(&args, "--output"), None);
        assert_eq!(arg_value(&args, "--url"), None);
    }
}
