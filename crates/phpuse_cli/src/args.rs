pub(crate) struct CliArgs {
    pub cmd: String,
    pub json_out: bool,
    pub short_tags: bool,
    pub no_diags: bool,
    pub timing: bool,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: phpuse <tokens|uses|check> [json] [short-tags] [no-diags] [timing] <file>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    parse_from(std::env::args().skip(1).collect())
}

pub(crate) fn parse_from(mut argv: Vec<String>) -> Result<CliArgs, String> {
    if argv.is_empty() {
        return Err(usage().to_string());
    }
    let cmd = argv.remove(0);

    let mut json_out = false;
    let mut short_tags = false;
    let mut no_diags = false;
    let mut timing = false;
    let mut positional: Vec<String> = Vec::new();

    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        match a.as_str() {
            "json" => json_out = true,
            "short-tags" => short_tags = true,
            "no-diags" => no_diags = true,
            "timing" => timing = true,
            _ => positional.push(a),
        }
    }

    Ok(CliArgs {
        cmd,
        json_out,
        short_tags,
        no_diags,
        timing,
        positional,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn flags_and_positionals() {
        let args = parse_from(argv(&["uses", "json", "a.php", "short-tags"])).unwrap();
        assert_eq!(args.cmd, "uses");
        assert!(args.json_out);
        assert!(args.short_tags);
        assert!(!args.no_diags);
        assert_eq!(args.positional, vec!["a.php".to_string()]);
    }

    #[test]
    fn dashed_options_are_rejected() {
        let err = parse_from(argv(&["uses", "--json"])).err();
        assert_eq!(err.as_deref(), Some("Unknown option: --json"));
    }

    #[test]
    fn empty_argv_is_usage() {
        assert_eq!(parse_from(Vec::new()).err().as_deref(), Some(usage()));
    }
}
