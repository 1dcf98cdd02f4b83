//! Tests for command-line parsing and processor validation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use facemosaic::MosaicError;
    use facemosaic::io::cli::{Cli, MosaicProcessor};
    use facemosaic::io::configuration::{
        BACKGROUND_CACHE_FILE, DEFAULT_BACKGROUND_TILE_SIZE, DEFAULT_FACE_TILE_SIZE, DEFAULT_SEED,
        DETECTOR_MIN_FACE_SIZE, FACE_CACHE_FILE,
    };
    use std::path::PathBuf;

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let args = vec!["facemosaic", "photo.jpg"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.target, PathBuf::from("photo.jpg"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.face_tile_size, DEFAULT_FACE_TILE_SIZE);
        assert_eq!(cli.background_tile_size, DEFAULT_BACKGROUND_TILE_SIZE);
        assert!(cli.model.is_none());
        assert!(!cli.quiet);
        assert!(!cli.rebuild_cache);
    }

    // Tests CLI parsing with explicit flags
    // Verified by dropping individual flag definitions
    #[test]
    fn test_cli_parse_all_args() {
        let args = vec![
            "facemosaic",
            "photo.jpg",
            "--face-tiles",
            "my_faces",
            "--background-tiles",
            "my_pool",
            "--output",
            "out.png",
            "--seed",
            "123",
            "--face-tile-size",
            "8",
            "--background-tile-size",
            "32",
            "--min-face-size",
            "40",
            "--rebuild-cache",
            "--quiet",
            "--no-skip",
        ];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.face_tiles, PathBuf::from("my_faces"));
        assert_eq!(cli.background_tiles, PathBuf::from("my_pool"));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.face_tile_size, 8);
        assert_eq!(cli.background_tile_size, 32);
        assert_eq!(cli.min_face_size, 40);
        assert!(cli.rebuild_cache);
        assert!(cli.quiet);
        assert!(cli.no_skip);
    }

    // Tests skip and progress behavior flags
    // Verified by inverting the boolean logic in the accessors
    #[test]
    fn test_skip_and_progress_flags() {
        let cli = Cli::parse_from(vec!["facemosaic", "p.jpg"]);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());

        let cli = Cli::parse_from(vec!["facemosaic", "p.jpg", "--no-skip", "--quiet"]);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests cache paths fall back to the conventional filenames
    // Verified by swapping the face and background defaults
    #[test]
    fn test_cache_path_defaults() {
        let cli = Cli::parse_from(vec!["facemosaic", "p.jpg"]);
        assert_eq!(cli.face_cache_path(), PathBuf::from(FACE_CACHE_FILE));
        assert_eq!(
            cli.background_cache_path(),
            PathBuf::from(BACKGROUND_CACHE_FILE)
        );

        let cli = Cli::parse_from(vec![
            "facemosaic",
            "p.jpg",
            "--face-cache",
            "f.json",
            "--background-cache",
            "b.json",
        ]);
        assert_eq!(cli.face_cache_path(), PathBuf::from("f.json"));
        assert_eq!(cli.background_cache_path(), PathBuf::from("b.json"));
    }

    // Tests detector parameters are assembled from CLI flags
    // Verified by returning defaults regardless of flags
    #[test]
    fn test_detector_params_from_flags() {
        let cli = Cli::parse_from(vec!["facemosaic", "p.jpg"]);
        assert_eq!(cli.detector_params().min_face_size, DETECTOR_MIN_FACE_SIZE);

        let cli = Cli::parse_from(vec![
            "facemosaic",
            "p.jpg",
            "--min-face-size",
            "64",
            "--score-threshold",
            "3.5",
            "--pyramid-scale",
            "0.7",
        ]);
        let params = cli.detector_params();
        assert_eq!(params.min_face_size, 64);
        assert!((params.score_threshold - 3.5).abs() < f64::EPSILON);
        assert!((params.pyramid_scale - 0.7).abs() < f32::EPSILON);
    }

    // Tests zero tile sizes are rejected before any file access
    // Verified by relaxing the validation bound
    #[test]
    fn test_zero_tile_size_is_rejected() {
        let cli = Cli::parse_from(vec![
            "facemosaic",
            "does_not_exist.jpg",
            "--face-tile-size",
            "0",
            "--quiet",
        ]);
        let mut processor = MosaicProcessor::new(cli);

        match processor.process() {
            Err(MosaicError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "face-tile-size");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }
}
