use proptest::prelude::*;

use py2rs::lowering::reindent_lines;
use py2rs::transpile;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_transpile_never_panics(src in "\\PC{0,200}") {
        let _ = transpile(&src);
    }

    #[test]
    fn prop_wrapped_output_closes_at_depth_zero(src in "[a-z0-9 =:()\\[\\]\n]{0,80}") {
        prop_assume!(!src.contains("main"));
        let out = transpile(&src);
        prop_assert!(out.starts_with("fn main() {"), "output does not start with `fn main() {{`: {:?}", out);
        prop_assert!(out.ends_with("\n}"), "output does not end with closing brace: {:?}", out);
    }

    #[test]
    fn prop_indent_is_depth_times_width(
        lines in prop::collection::vec("[a-z {}]{0,12}", 0..30),
        width in 1usize..8,
    ) {
        let result = reindent_lines(&lines, width);
        prop_assert_eq!(result.lines.len(), lines.len());
        for (line, depth) in result.lines.iter().zip(&result.depths) {
            let leading = line.len() - line.trim_start().len();
            prop_assert_eq!(leading, depth * width);
        }
    }

    #[test]
    fn prop_reindent_is_idempotent(lines in prop::collection::vec("[a-z {}\t]{0,12}", 0..30)) {
        let once = reindent_lines(&lines, 4);
        let twice = reindent_lines(&once.lines, 4);
        prop_assert_eq!(once, twice);
    }
}
