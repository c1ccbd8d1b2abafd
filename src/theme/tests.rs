//! Tests for theme files applied over the built-in theme

#[cfg(test)]
mod tests {
    use crate::theme::loader::{load_theme_from_path, parse_theme, ThemeError};
    use crate::theme::{FullTheme, Merge, Status, ThemePatch};
    use enum_iterator::all;
    use ratatui::style::Color;
    use std::io::Write;

    #[test]
    fn test_partial_theme_file_uses_defaults() {
        let yaml_content = "light:
  step:
    pending:
      background: \"#000000\"
";
        let patch = parse_theme(yaml_content).unwrap();
        let theme = FullTheme::resolve(&patch);
        let default = FullTheme::default();

        assert_eq!(theme.light.step.pending.background(), Color::Rgb(0, 0, 0));
        assert_eq!(theme.light.step.pending.color(), Color::Rgb(0xa1, 0xa3, 0xa7));
        assert_eq!(theme.dark.step.pending.color(), default.dark.step.pending.color());
        assert_eq!(theme.dark, default.dark);
    }

    #[test]
    fn test_camel_case_and_snake_case_keys() {
        let camel = parse_theme(
            "dark:
  content:
    progress:
      stepNumber:
        color: cyan
  progressBar:
    completed:
      fill: \"#fff\"
",
        )
        .unwrap();
        let snake = parse_theme(
            "dark:
  content:
    progress:
      step_number:
        color: cyan
  progress_bar:
    completed:
      fill: \"#fff\"
",
        )
        .unwrap();
        assert_eq!(camel, snake);

        let theme = FullTheme::resolve(&camel);
        assert_eq!(theme.dark.content.progress.step_number.color(), Color::Cyan);
        assert_eq!(
            theme.dark.progress_bar.completed.fill(),
            Some(Color::Rgb(255, 255, 255))
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = parse_theme("light:\n  stepp:\n    pending: {}\n");
        assert!(matches!(result, Err(ThemeError::Yaml(_))));
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = parse_theme("light:\n  step:\n    pending:\n      color: not-a-color\n");
        assert!(matches!(result, Err(ThemeError::Yaml(_))));
    }

    #[test]
    fn test_empty_file_is_empty_patch() {
        assert!(parse_theme("").unwrap().is_empty());
        assert!(parse_theme("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dark:\n  step:\n    completed:\n      color: black").unwrap();
        let patch = load_theme_from_path(file.path()).unwrap();
        let theme = FullTheme::resolve(&patch);
        assert_eq!(theme.dark.step.completed.color(), Color::Black);
        assert_eq!(theme.light, FullTheme::default().light);
    }

    #[test]
    fn test_full_theme_serializes_as_a_complete_patch() {
        // A dump of the defaults is itself a valid overlay that changes nothing.
        let yaml = serde_yaml::to_string(&FullTheme::default()).unwrap();
        let patch: ThemePatch = parse_theme(&yaml).unwrap();
        let mut theme = FullTheme::default();
        theme.merge(&patch);
        assert_eq!(theme, FullTheme::default());
    }

    #[test]
    fn test_every_status_is_populated_in_both_variants() {
        let theme = FullTheme::resolve(&parse_theme("light: {}\ndark: {}\n").unwrap());
        for status in all::<Status>() {
            for variant in [&theme.light, &theme.dark] {
                assert_ne!(variant.step[status].background(), Color::Reset);
                assert_ne!(variant.content[status].title.color(), Color::Reset);
                assert_ne!(variant.progress_bar[status].background(), Color::Reset);
            }
        }
    }

    #[test]
    fn test_variant_selection() {
        let theme = FullTheme::default();
        assert_eq!(
            theme.variant(true).step.progress.background(),
            Color::Rgb(0x19, 0xb6, 0xfe)
        );
        assert_eq!(
            theme.variant(false).step.progress.background(),
            Color::Rgb(0x3c, 0x3f, 0xed)
        );
    }
}
