use anyhow::Result;
use restriction::{EnzymeDatabase, RestrictionEnzyme, DEFAULT_ENZYMES};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct EnzymeRow<'a> {
    enzyme: &'a str,
    recognition_site: String,
    cut: String,
    default: bool,
}

impl<'a> From<&'a RestrictionEnzyme> for EnzymeRow<'a> {
    fn from(enzyme: &'a RestrictionEnzyme) -> Self {
        Self {
            enzyme: &enzyme.name,
            recognition_site: enzyme.site_to_string(),
            cut: enzyme.cut_pattern(),
            default: DEFAULT_ENZYMES.contains(&enzyme.name.as_str()),
        }
    }
}

pub fn write_enzyme_table<W: Write>(writer: W, database: &EnzymeDatabase) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    for enzyme in database.enzymes() {
        wtr.serialize(EnzymeRow::from(enzyme))?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn list_enzymes() -> Result<()> {
    let database = EnzymeDatabase::builtin()?;
    let stdout = io::stdout();
    write_enzyme_table(stdout.lock(), &database)
}
