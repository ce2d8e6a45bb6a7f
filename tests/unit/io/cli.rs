//! Tests for command-line parsing and batch analysis

#[cfg(test)]
mod tests {
    use clap::Parser;
    use kolam::io::cli::{
        AnalyzeArgs, Cli, Command, FileProcessor, GenerateArgs, RenderArgs, generate, render,
    };
    use kolam::io::configuration::{DEFAULT_PALETTE, DEFAULT_SEED};
    use kolam::geometry::point::Point;
    use kolam::synthesis::generators::SyntheticPattern;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn analyze_args(target: &Path) -> AnalyzeArgs {
        AnalyzeArgs {
            target: target.to_path_buf(),
            quiet: true,
            no_skip: false,
        }
    }

    const SQUARE: &str = r#"[{"x":0,"y":0},{"x":100,"y":0},{"x":100,"y":100},{"x":0,"y":100}]"#;

    // Tests analyze parsing with only the target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_analyze_minimal() {
        let cli = Cli::parse_from(["kolam", "analyze", "dots.json"]);

        assert!(!cli.verbose);
        let Command::Analyze(args) = cli.command else {
            unreachable!("Expected analyze command");
        };
        assert_eq!(args.target, PathBuf::from("dots.json"));
        assert!(args.skip_existing());
        assert!(args.should_show_progress());
    }

    // Tests analyze flags and the global verbose flag
    // Verified by inverting boolean logic in skip_existing
    #[test]
    fn test_cli_parse_analyze_flags() {
        let cli = Cli::parse_from(["kolam", "analyze", "dir", "--quiet", "--no-skip", "-v"]);

        assert!(cli.verbose);
        let Command::Analyze(args) = cli.command else {
            unreachable!("Expected analyze command");
        };
        assert!(!args.skip_existing());
        assert!(!args.should_show_progress());
    }

    // Tests generate parses pattern names and the seed default
    // Verified by removing the FromStr parser
    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::parse_from(["kolam", "generate", "spiral"]);
        let Command::Generate(args) = cli.command else {
            unreachable!("Expected generate command");
        };
        assert_eq!(args.pattern, Some(SyntheticPattern::Spiral));
        assert_eq!(args.seed, DEFAULT_SEED);

        assert!(Cli::try_parse_from(["kolam", "generate", "hexagon"]).is_err());
        assert!(Cli::try_parse_from(["kolam", "generate", "grid", "--from", "x"]).is_err());
    }

    // Tests render parses a comma-separated palette and canvas size
    // Verified by dropping the value delimiter
    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::parse_from([
            "kolam", "render", "in.json", "-c", "#000,#FFF", "-w", "300", "-H", "200",
        ]);
        let Command::Render(args) = cli.command else {
            unreachable!("Expected render command");
        };

        let options = args.options();
        assert_eq!(options.colors, ["#000", "#FFF"]);
        assert_eq!((options.width, options.height), (300, 200));
        assert_eq!(options.style, "traditional");
        assert_eq!(args.output_path(), PathBuf::from("in_render.png"));
    }

    // Tests an empty palette falls back to the defaults
    // Verified by passing the empty palette through
    #[test]
    fn test_render_default_palette() {
        let cli = Cli::parse_from(["kolam", "render", "in.json"]);
        let Command::Render(args) = cli.command else {
            unreachable!("Expected render command");
        };
        assert_eq!(args.options().colors, DEFAULT_PALETTE);
    }

    // Tests status parses without arguments
    // Verified by requiring a target for status
    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["kolam", "status"]);
        assert!(matches!(cli.command, Command::Status));
    }

    // Tests batch analysis writes one document per input and skips outputs
    // Verified by analyzing previously written outputs
    #[test]
    fn test_process_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("square.json"), SQUARE).expect("write input");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write notes");

        let analyzed = FileProcessor::new(analyze_args(dir.path()))
            .process()
            .expect("analysis succeeds");
        assert_eq!(analyzed, 1);

        let output = FileProcessor::output_path(&dir.path().join("square.json"));
        let text = fs::read_to_string(&output).expect("analysis written");
        let json: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(json["patternType"], "simple");
        assert_eq!(json["dots"].as_array().map(Vec::len), Some(4));
        assert!(json["recommendations"].is_array());

        let again = FileProcessor::new(analyze_args(dir.path()))
            .process()
            .expect("second run succeeds");
        assert_eq!(again, 0);
    }

    // Tests --no-skip reprocesses existing outputs
    // Verified by ignoring the no_skip flag
    #[test]
    fn test_process_no_skip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("square.json");
        fs::write(&input, SQUARE).expect("write input");
        fs::write(FileProcessor::output_path(&input), "{}").expect("write stale output");

        let args = AnalyzeArgs {
            no_skip: true,
            ..analyze_args(&input)
        };
        assert_eq!(FileProcessor::new(args).process().ok(), Some(1));
    }

    // Tests unsupported or missing targets are rejected
    // Verified by returning an empty file list instead
    #[test]
    fn test_process_invalid_target() {
        let dir = tempfile::tempdir().expect("temp dir");
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "text").expect("write notes");

        assert!(FileProcessor::new(analyze_args(&notes)).process().is_err());
        assert!(
            FileProcessor::new(analyze_args(&dir.path().join("missing")))
                .process()
                .is_err()
        );
    }

    // Tests generate writes a point array the analyzer can read back
    // Verified by writing the pattern name instead of the points
    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let output = dir.path().join("flower.json");

        let args = GenerateArgs {
            pattern: Some(SyntheticPattern::Flower),
            from: None,
            seed: DEFAULT_SEED,
            output: Some(output.clone()),
        };
        assert!(generate(&args).is_ok());

        let points: Vec<Point> =
            serde_json::from_str(&fs::read_to_string(&output).expect("points written"))
                .expect("valid points");
        assert_eq!(points.len(), 45);
    }

    // Tests render writes a PNG beside the input by default
    // Verified by writing to the working directory instead
    #[test]
    fn test_render_to_png() {
        let dir = tempfile::tempdir().expect("temp dir");
        let input = dir.path().join("square.json");
        fs::write(&input, SQUARE).expect("write input");

        let args = RenderArgs {
            input: input.clone(),
            output: None,
            style: "modern".to_string(),
            colors: Vec::new(),
            width: 200,
            height: 120,
        };
        let output = render(&args).expect("render succeeds");

        assert_eq!(output, dir.path().join("square_render.png"));
        let reloaded = image::open(&output).expect("PNG decodes");
        assert_eq!((reloaded.width(), reloaded.height()), (200, 120));
    }
}
