use std::io::{self, Write as _};
use std::path::PathBuf;

use dietree_encoder::{
    DebugInfo, DumpOptions, EncoderConfig, SectionFilter, render, write_atomically,
};

use super::CommandError;
use super::sample;

pub struct DumpArgs {
    pub config: EncoderConfig,
    /// `None` prints to stdout.
    pub output: Option<PathBuf>,
    pub omit: Vec<String>,
    pub color: bool,
    pub show_forms: bool,
    pub show_abbrevs: bool,
}

pub fn run(args: DumpArgs) -> Result<(), CommandError> {
    let info = sample::build(args.config)?;
    let text = render_dump(&info, &args);

    let Some(path) = &args.output else {
        io::stdout().write_all(text.as_bytes())?;
        return Ok(());
    };

    write_atomically(path, text.as_bytes())?;
    eprintln!(
        "✓ {} entries, {} bytes of .debug_info written to {}",
        info.len(),
        info.end_offset() - info.base_offset(),
        path.display()
    );
    Ok(())
}

pub fn render_dump(info: &DebugInfo, args: &DumpArgs) -> String {
    let options = DumpOptions::new()
        .colored(args.color)
        .show_forms(args.show_forms)
        .show_abbrevs(args.show_abbrevs);
    let text = render(info, &options);

    let filter = args
        .omit
        .iter()
        .fold(SectionFilter::new(), |filter, label| filter.omit(label.as_str()));
    if filter.is_empty() {
        return text;
    }
    tracing::debug!(sections = ?filter.omitted(), "omitting sections");
    filter.apply(&text)
}
