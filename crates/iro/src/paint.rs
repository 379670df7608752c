//! The renderer turning documents into text with ANSI escape sequences.
//!
//! Each scope, i.e., a document, group, or document separator, is painted by
//! one recursive invocation of the painter. It starts with the style active at the
//! scope's position and returns the style active at its end. After a nested
//! scope, the painter emits the difference from that trailing style back to the
//! enclosing scope's style, right before the next visible item. Hence nested
//! scopes restore their parents' styles without a stack of escape sequences.

use crate::document::{Document, Node};
use crate::opt::{Options, Separator};
use crate::style::{Fidelity, Style, RESET};

/// Paint the document starting from the given style.
pub(crate) fn paint(document: &Document, style: &Style) -> String {
    let mut painter = Painter::new(document.options().fidelity());
    painter.scope(document.nodes(), document.options(), style, 0);
    painter.finish()
}

#[derive(Debug)]
struct Painter {
    fidelity: Fidelity,
    out: String,
}

impl Painter {
    fn new(fidelity: Fidelity) -> Self {
        Self {
            fidelity,
            out: String::new(),
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn diff(&mut self, before: &Style, after: &Style) {
        self.out.push_str(&before.diff_with(after, self.fidelity));
    }

    /// Paint the nodes of one scope and return its trailing style.
    fn scope(&mut self, nodes: &[Node], options: &Options, given: &Style, depth: usize) -> Style {
        let collect = options.collect_styles_first();
        log::trace!(
            "painting {} nodes at depth {} ({})",
            nodes.len(),
            depth,
            if collect { "collecting styles first" } else { "interleaving styles" }
        );

        // A leading reset at the top level is written before anything else.
        let leading_reset = depth == 0
            && matches!(nodes.first(), Some(Node::Element(element)) if element.is_reset());
        let given = if leading_reset {
            self.out.push_str(RESET);
            Style::default()
        } else {
            *given
        };

        let mut current = given;
        if collect {
            for node in nodes {
                if let Node::Element(element) = node {
                    current = current.apply(*element);
                }
            }
            self.diff(&given, &current);
        }

        let mut found_visible = false;
        let mut trailing: Option<Style> = None;

        for node in nodes {
            if let Node::Element(element) = node {
                if !collect {
                    let next = current.apply(*element);
                    self.diff(&current, &next);
                    current = next;
                }
                continue;
            }

            // Restore this scope's style after a nested scope.
            if let Some(style) = trailing.take() {
                self.diff(&style, &current);
            }

            if found_visible {
                self.separator(options.separator(), &current, depth);
            }

            trailing = match node {
                Node::Text(text) => {
                    self.out.push_str(text);
                    None
                }
                Node::Group(nodes) => Some(self.scope(nodes, options, &current, depth + 1)),
                Node::Document(doc) => {
                    Some(self.scope(doc.nodes(), doc.options(), &current, depth + 1))
                }
                Node::Element(_) => None,
            };
            found_visible = true;
        }

        if depth == 0 {
            self.out.push_str(RESET);
        }

        trailing.unwrap_or(current)
    }

    fn separator(&mut self, separator: Option<&Separator>, current: &Style, depth: usize) {
        match separator {
            None => (),
            Some(Separator::Text(text)) => self.out.push_str(text),
            Some(Separator::Document(doc)) => {
                let style = self.scope(doc.nodes(), doc.options(), current, depth + 1);
                self.diff(&style, current);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::document::{Document, Node};
    use crate::error::Error;
    use crate::nodes;
    use crate::opt::Options;
    use crate::style::{Attribute, Color, Disable, Element, Font, Style};
    use crate::termco::{AnsiColor, EightBitColor, Rgb};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use Attribute::{Bold, Dim, Underline};

    const RESET: &str = "\x1b[0m";
    const BOLD: &str = "\x1b[1m";
    const DIM: &str = "\x1b[2m";
    const NORMAL_INTENSITY: &str = "\x1b[22m";

    fn spaced(nodes: Vec<Node>) -> String {
        Document::with_options(nodes, Options::with_separator(" ")).render()
    }

    fn interleaved(nodes: Vec<Node>) -> String {
        Document::with_options(
            nodes,
            Options::builder()
                .separator(" ")
                .collect_styles_first(false)
                .build(),
        )
        .render()
    }

    fn fg(color: AnsiColor) -> Color {
        Color::foreground(color)
    }

    fn font(number: u8) -> Result<Font, Error> {
        Font::new(number)
    }

    #[test]
    fn test_text_only() {
        assert_eq!(
            Document::new(nodes!["normal ", "normal"]).render(),
            format!("normal normal{}", RESET)
        );
        assert_eq!(
            spaced(nodes!["normal", "normal", "!"]),
            format!("normal normal !{}", RESET)
        );
    }

    #[test]
    fn test_nested_separators() {
        let inner = Document::with_options(nodes!["n", "rmal"], Options::with_separator("o"));
        assert_eq!(
            spaced(nodes!["normal", inner, "!"]),
            format!("normal normal !{}", RESET)
        );

        // Nested documents bring their own separator.
        let inner = Document::with_options(
            nodes!["n", Document::new(nodes!["r", "mal"])],
            Options::with_separator("o"),
        );
        assert_eq!(
            spaced(nodes!["normal", inner, "!"]),
            format!("normal normal !{}", RESET)
        );
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            spaced(nodes!["bold", Bold, "bold", "!"]),
            format!("{}bold bold !{}", BOLD, RESET)
        );
        assert_eq!(
            interleaved(nodes!["normal", Bold, "bold", "!"]),
            format!("normal{} bold !{}", BOLD, RESET)
        );
        assert_eq!(
            spaced(nodes!["bold-red", Bold, fg(AnsiColor::BrightRed), "bold-red", "!"]),
            format!("{}\x1b[91mbold-red bold-red !{}", BOLD, RESET)
        );
        assert_eq!(
            spaced(nodes!["bold-dim", Bold, Dim, "bold-dim", "!"]),
            format!("{}{}bold-dim bold-dim !{}", BOLD, DIM, RESET)
        );
        assert_eq!(
            spaced(nodes!["bold-dim", Bold, "bold-dim", Dim, "bold-dim", "!"]),
            format!("{}{}bold-dim bold-dim bold-dim !{}", BOLD, DIM, RESET)
        );
        assert_eq!(
            interleaved(nodes!["normal", Bold, "bold", Dim, "bold-dim", Disable::Bold, "dim", "!"]),
            format!(
                "normal{} bold{} bold-dim{}{} dim !{}",
                BOLD, DIM, NORMAL_INTENSITY, DIM, RESET
            )
        );
    }

    #[test]
    fn test_fonts() -> Result<(), Error> {
        let nodes = || -> Result<Vec<Node>, Error> {
            Ok(nodes![
                fg(AnsiColor::Red),
                "font-1",
                font(1)?,
                nodes![font(2)?, "font-2", nodes![Disable::Font, "default"], "font-2"],
                "font-1",
            ])
        };

        assert_eq!(
            spaced(nodes()?),
            format!(
                "\x1b[31m\x1b[11mfont-1 \x1b[12mfont-2 \x1b[10mdefault\x1b[12m font-2\x1b[11m font-1{}",
                RESET
            )
        );
        assert_eq!(
            interleaved(nodes()?),
            format!(
                "\x1b[31mfont-1\x1b[11m \x1b[12mfont-2 \x1b[10mdefault\x1b[12m font-2\x1b[11m font-1{}",
                RESET
            )
        );
        Ok(())
    }

    #[test]
    fn test_separator_only_between_values() -> Result<(), Error> {
        let doc = Document::with_options(
            nodes![
                fg(AnsiColor::Red),
                "a",
                fg(AnsiColor::Blue),
                font(1)?,
                nodes!["c", fg(AnsiColor::Red), "d", Color::background(AnsiColor::Blue)],
                "e",
            ],
            Options::with_separator("_"),
        );
        assert_eq!(
            doc.render(),
            format!(
                "\x1b[34m\x1b[11ma_\x1b[31m\x1b[44mc_d\x1b[34m\x1b[49m_e{}",
                RESET
            )
        );
        Ok(())
    }

    #[test]
    fn test_nested_styles() {
        assert_eq!(
            spaced(nodes![Underline, "under", nodes![Bold, "under-bold"], "under", "!"]),
            format!(
                "\x1b[4munder {}under-bold{} under !{}",
                BOLD, NORMAL_INTENSITY, RESET
            )
        );
        assert_eq!(
            spaced(nodes!["normal", nodes![Bold, "bold"], "normal", "!"]),
            format!("normal {}bold{} normal !{}", BOLD, RESET, RESET)
        );
        assert_eq!(
            spaced(nodes![Bold, "bold", nodes![Bold, "bold"], "bold", "!"]),
            format!("{}bold bold bold !{}", BOLD, RESET)
        );
        assert_eq!(
            spaced(nodes![Bold, "bold", nodes![Dim, "bold-dim"], "bold", "!"]),
            format!(
                "{}bold {}bold-dim{}{} bold !{}",
                BOLD, DIM, NORMAL_INTENSITY, BOLD, RESET
            )
        );
        assert_eq!(
            spaced(nodes![
                fg(AnsiColor::Red),
                "red",
                nodes![fg(AnsiColor::Blue), "blue"],
                "red",
                "!"
            ]),
            format!("\x1b[31mred \x1b[34mblue\x1b[31m red !{}", RESET)
        );
    }

    #[test]
    fn test_nested_colors() {
        let nodes = nodes![
            fg(AnsiColor::Red),
            "red",
            nodes![
                Color::foreground(EightBitColor::new(12)),
                "blue",
                nodes![Color::foreground(Rgb::new(0, 0xff, 0)), "green"],
                "blue"
            ],
            "red"
        ];
        assert_eq!(
            Document::new(nodes.clone()).render(),
            format!(
                "\x1b[31mred\x1b[38;5;12mblue\x1b[38;2;0;255;0mgreen\x1b[38;5;12mblue\x1b[31mred{}",
                RESET
            )
        );

        // With 24-bit colors disabled, green becomes palette entry 10.
        let doc = Document::with_options(nodes, Options::builder().disable_rgb_output(true).build());
        assert_eq!(
            doc.render(),
            format!(
                "\x1b[31mred\x1b[38;5;12mblue\x1b[38;5;10mgreen\x1b[38;5;12mblue\x1b[31mred{}",
                RESET
            )
        );

        let nodes = nodes![
            Color::background(AnsiColor::Red),
            "red",
            nodes![
                Color::background(EightBitColor::new(12)),
                "blue",
                nodes![Color::background(Rgb::new(0, 0xff, 0)), "green"],
                "blue"
            ],
            "red"
        ];
        assert_eq!(
            Document::new(nodes).render(),
            format!(
                "\x1b[41mred\x1b[48;5;12mblue\x1b[48;2;0;255;0mgreen\x1b[48;5;12mblue\x1b[41mred{}",
                RESET
            )
        );
    }

    #[test]
    fn test_nested_intensity_loop() {
        let nodes = nodes![
            Bold,
            "bold",
            nodes![
                Disable::Bold,
                Dim,
                "dim",
                nodes![
                    Disable::Dim,
                    Bold,
                    "bold",
                    nodes![Disable::Bold, Dim, "dim"],
                    "bold"
                ],
                "dim"
            ],
            "bold"
        ];
        let to_dim = format!("{}{}", NORMAL_INTENSITY, DIM);
        let to_bold = format!("{}{}", NORMAL_INTENSITY, BOLD);
        assert_eq!(
            spaced(nodes),
            format!(
                "{BOLD}bold {to_dim}dim {to_bold}bold {to_dim}dim{to_bold} bold{to_dim} dim{to_bold} bold{RESET}"
            )
        );
    }

    #[test]
    fn test_nested_reset() {
        let nodes = nodes![
            Bold,
            "bold",
            nodes![
                Dim,
                "bold-dim",
                nodes![Element::Reset, "normal", nodes![Dim, "dim"], "normal"],
                "bold-dim"
            ],
            "bold"
        ];
        assert_eq!(
            spaced(nodes),
            format!(
                "{BOLD}bold {DIM}bold-dim {RESET}normal {DIM}dim{RESET} normal\
                 {BOLD}{DIM} bold-dim{NORMAL_INTENSITY}{BOLD} bold{RESET}"
            )
        );
    }

    #[test]
    fn test_leading_reset() {
        assert_eq!(
            Document::new(nodes![Element::Reset, "plain"]).render(),
            format!("{}plain{}", RESET, RESET)
        );
        // The leading reset comes before the styles collected for the scope.
        assert_eq!(
            Document::new(nodes![Element::Reset, Bold, "x"]).render(),
            format!("{RESET}{BOLD}x{RESET}")
        );
        assert_eq!(
            interleaved(nodes![Element::Reset, Bold, "x"]),
            format!("{RESET}{BOLD}x{RESET}")
        );
        let italic = Style::default().apply(Attribute::Italic);
        assert_eq!(
            Document::new(nodes![Element::Reset, Bold, "x"]).render_from(&italic),
            format!("{RESET}{BOLD}x{RESET}")
        );

        // A reset that is not the first node only clears the style.
        assert_eq!(
            Document::new(nodes!["plain", Element::Reset, "plain"]).render(),
            format!("plainplain{}", RESET)
        );
    }

    #[test]
    fn test_document_separator() {
        let separator = Document::new(nodes![Color::foreground(AnsiColor::Green), "|"]);
        let doc = Document::with_options(
            nodes![Bold, "a", "b"],
            Options::builder().separator(separator).build(),
        );
        assert_eq!(
            doc.render(),
            format!("{}a\x1b[32m|\x1b[39mb{}", BOLD, RESET)
        );
    }

    #[test]
    fn test_nested_document_options() {
        // The nested document interleaves, the root collects.
        let inner = Document::with_options(
            nodes!["x", Dim, "y"],
            Options::builder().separator("+").collect_styles_first(false).build(),
        );
        assert_eq!(
            spaced(nodes![Bold, "a", inner, "b"]),
            format!(
                "{}a x{}+y{}{} b{}",
                BOLD, DIM, NORMAL_INTENSITY, BOLD, RESET
            )
        );

        // The root's fidelity governs nested documents.
        let inner = Document::new(nodes![Color::foreground(Rgb::new(0, 0xff, 0)), "g"]);
        let doc = Document::with_options(
            nodes![inner],
            Options::builder().disable_rgb_output(true).build(),
        );
        assert_eq!(doc.render(), format!("\x1b[38;5;10mg{}", RESET));
    }

    #[test]
    fn test_render_from() {
        let italic = Style::default().apply(Attribute::Italic);
        let doc = Document::new(nodes![Bold, "text"]);
        assert_eq!(
            doc.render_from(&italic),
            format!("{}text{}", BOLD, RESET)
        );

        let doc = Document::new(nodes![Disable::Italic, "text"]);
        assert_eq!(doc.render_from(&italic), format!("{}text{}", RESET, RESET));
    }

    #[test]
    fn test_deterministic() {
        let doc = Document::with_options(
            nodes![Bold, "a", nodes![Dim, "b", nodes![Element::Reset, "c"]], "d"],
            Options::with_separator(","),
        );
        let first = doc.render();
        assert_eq!(first, doc.render());
        assert_eq!(first, doc.to_string());
        assert!(first.ends_with(RESET));
    }

    fn random_element(rng: &mut StdRng) -> Element {
        if rng.random_bool(0.1) {
            if let Ok(font) = Font::new(rng.random_range(0..=10)) {
                return font.into();
            }
        }

        let elements: [Element; 12] = [
            Element::Reset,
            Bold.into(),
            Dim.into(),
            Underline.into(),
            Attribute::SlowBlink.into(),
            Disable::Intensity.into(),
            Disable::Bold.into(),
            Disable::Font.into(),
            Disable::Foreground.into(),
            fg(AnsiColor::Red).into(),
            Color::background(EightBitColor::new(200)).into(),
            Color::foreground(Rgb::new(0x5f, 0x87, 0xaf)).into(),
        ];
        elements[rng.random_range(0..elements.len())]
    }

    fn random_options(rng: &mut StdRng, depth: usize) -> Options {
        let mut builder = Options::builder();
        builder
            .collect_styles_first(rng.random_bool(0.5))
            .disable_rgb_output(rng.random_bool(0.3));
        match rng.random_range(0..3) {
            0 => (),
            1 => {
                builder.separator(" ");
            }
            _ => {
                builder.separator(Document::new(random_nodes(rng, depth + 1)));
            }
        }
        builder.build()
    }

    fn random_nodes(rng: &mut StdRng, depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        for _ in 0..rng.random_range(0..6) {
            let node = match rng.random_range(0..10) {
                0..=3 => Node::from(format!("t{}", rng.random_range(0..100))),
                4..=6 => Node::from(random_element(rng)),
                7 | 8 if depth < 3 => Node::from(random_nodes(rng, depth + 1)),
                9 if depth < 3 => Node::from(Document::with_options(
                    random_nodes(rng, depth + 1),
                    random_options(rng, depth + 1),
                )),
                _ => Node::from("leaf"),
            };
            nodes.push(node);
        }
        nodes
    }

    #[test]
    fn test_random_documents() {
        let mut rng = StdRng::seed_from_u64(0x1f0d0c);
        let italic = Style::default().apply(Attribute::Italic);

        for _ in 0..300 {
            let mut nodes = random_nodes(&mut rng, 0);
            if rng.random_bool(0.2) {
                nodes.insert(0, Element::Reset.into());
            }
            let doc = Document::with_options(nodes, random_options(&mut rng, 0));

            let first = doc.render();
            assert!(first.ends_with(RESET), "{:?}", doc);
            assert_eq!(first, doc.render());
            assert_eq!(first, doc.to_string());
            assert!(doc.render_from(&italic).ends_with(RESET), "{:?}", doc);
        }
    }
}
