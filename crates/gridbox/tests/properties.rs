use console::{measure_text_width, strip_ansi_codes};
use gridbox::{generate, BoxError, BoxGenerator, BoxOptions, Overflow, Row, Template};
use proptest::prelude::*;

// Strategy for templates of plain text rows, 1-3 sectors each
fn template_strategy() -> impl Strategy<Value = Template> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z0-9 ]{1,30}", 1..4),
        1..5,
    )
    .prop_map(|rows| rows.into_iter().map(Row::content).collect())
}

fn plain(output: &str) -> String {
    strip_ansi_codes(output).into_owned()
}

proptest! {
    #[test]
    fn every_line_has_the_same_width(
        template in template_strategy(),
        max_width in 14usize..90,
        trim in any::<bool>(),
    ) {
        let overflow = if trim { Overflow::Trim } else { Overflow::Newline };
        let options = BoxOptions::new().max_width(max_width).overflow(overflow);
        let output = generate(&template, &options).unwrap();

        let widths: Vec<usize> = output.split('\n').map(measure_text_width).collect();
        prop_assert!(widths.len() >= 2);
        prop_assert!(widths.iter().all(|w| *w == widths[0]), "widths: {:?}", widths);
    }

    #[test]
    fn single_column_fills_max_width(
        text in "[a-zA-Z0-9]{1,100}",
        max_width in 5usize..90,
    ) {
        let template = Template::new().row([text.as_str()]);
        let output = generate(&template, &BoxOptions::new().max_width(max_width)).unwrap();
        for line in output.split('\n') {
            prop_assert_eq!(measure_text_width(line), max_width);
        }
    }

    #[test]
    fn rendering_is_deterministic_for_fixed_colors(template in template_strategy()) {
        let options = BoxOptions::new().grid_color(0x336699u32).text_color("#abc");
        let first = generate(&template, &options).unwrap();
        let second = generate(&template, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn colors_never_move_glyphs(template in template_strategy()) {
        let colored = BoxOptions::new()
            .grid_color("rainbow16")
            .text_color("rainbow24")
            .title("title");
        let uncolored = BoxOptions::new().title("title");

        let a = plain(&generate(&template, &colored).unwrap());
        let b = plain(&generate(&template, &uncolored).unwrap());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn seeded_rainbows_are_reproducible(template in template_strategy(), seed in any::<u64>()) {
        let generator = BoxGenerator::new();
        let options = BoxOptions::new().grid_color("rainbow").text_color("rainbow24");
        let a = generator.generate_seeded(&template, &options, seed).unwrap();
        let b = generator.generate_seeded(&template, &options, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn trimmed_text_is_a_prefix_of_the_input(
        texts in prop::collection::vec("[a-zA-Z0-9]{1,40}", 1..5),
        max_width in 8usize..40,
    ) {
        let template: Template = texts.iter().map(|t| Row::content([t.as_str()])).collect();
        let options = BoxOptions::new().max_width(max_width).overflow(Overflow::Trim);
        let output = plain(&generate(&template, &options).unwrap());
        let lines: Vec<&str> = output.split('\n').collect();

        for (k, text) in texts.iter().enumerate() {
            let line = lines[1 + 2 * k];
            let inner = line
                .strip_prefix("│ ")
                .and_then(|l| l.strip_suffix(" │"))
                .unwrap_or_default()
                .trim_end();

            if inner == text {
                continue;
            }
            let kept = inner.strip_suffix("...");
            prop_assert!(kept.is_some(), "{:?} is neither {:?} nor truncated", inner, text);
            prop_assert!(text.starts_with(kept.unwrap_or_default()));
        }
    }

    #[test]
    fn autocorrect_never_fails(sectors in 1usize..8, max_width in 0usize..30) {
        let template = Template::new().row(vec!["x"; sectors]);

        let corrected = BoxOptions::new().max_width(max_width).autocorrect(true);
        let output = generate(&template, &corrected).unwrap();
        let width = measure_text_width(output.split('\n').next().unwrap_or_default());
        prop_assert!(width >= 3 * sectors + 2);

        let strict = BoxOptions::new().max_width(max_width);
        match generate(&template, &strict) {
            Ok(_) => prop_assert!(max_width > 3 * sectors),
            Err(BoxError::Layout { minimum, .. }) => {
                prop_assert!(minimum > max_width);
                prop_assert!(generate(&template, &BoxOptions::new().max_width(minimum)).is_ok());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
