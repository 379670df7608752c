use iro::document::Document;
use iro::error::Error;
use iro::nodes;
use iro::opt::Options;
use iro::style::{Attribute, Color, Disable, Font};
use iro::termco::{AnsiColor, EightBitColor, Rgb};

fn main() -> Result<(), Error> {
    let orange: Rgb = "#ff5f00".parse()?;
    let separator = Document::new(nodes![Color::foreground(EightBitColor::new(244)), " · "]);

    let doc = Document::with_options(
        nodes![
            Attribute::Bold,
            Color::foreground(orange),
            "Wow!",
            nodes![Attribute::Dim, "bold and dim", nodes![Disable::Bold, "just dim"]],
            nodes![Color::foreground(AnsiColor::BrightBlue), Attribute::Underline, "blue"],
            nodes![Font::new(1)?, Attribute::Italic, "italic"],
            "Wow again!",
        ],
        Options::builder()
            .separator(separator)
            .disable_rgb_output(std::env::var_os("IRO_8BIT").is_some())
            .build(),
    );

    println!("\n    {}\n", doc);
    Ok(())
}
