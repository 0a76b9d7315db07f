use dietree_encoder::{DebugInfo, EncoderConfig, SectionSizes};
use serde::Serialize;

use super::CommandError;
use super::sample;

pub struct SectionsArgs {
    pub config: EncoderConfig,
    pub json: bool,
}

/// Size summary of an encoded unit.
#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub entries: usize,
    pub abbreviations: usize,
    pub base_offset: u64,
    pub end_offset: u64,
    pub sizes: SectionSizes,
}

impl SectionReport {
    pub fn new(info: &DebugInfo) -> Self {
        Self {
            entries: info.len(),
            abbreviations: info.abbrevs().len(),
            base_offset: info.base_offset(),
            end_offset: info.end_offset(),
            sizes: info.encode().sizes(),
        }
    }

    pub fn to_text(&self) -> String {
        format!(
            "entries: {}\nabbreviations: {}\noffsets: 0x{:08x}..0x{:08x}\n\
             .debug_info: {} bytes\n.debug_abbrev: {} bytes\n.debug_str: {} bytes\n",
            self.entries,
            self.abbreviations,
            self.base_offset,
            self.end_offset,
            self.sizes.debug_info,
            self.sizes.debug_abbrev,
            self.sizes.debug_str,
        )
    }
}

pub fn run(args: SectionsArgs) -> Result<(), CommandError> {
    let info = sample::build(args.config)?;
    let report = SectionReport::new(&info);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
