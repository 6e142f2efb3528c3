use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

pub trait OutputWriter {
    fn write_model(&mut self, model: &Model) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_model(&mut self, model: &Model) -> anyhow::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, model)?;
        } else {
            serde_json::to_writer(&mut self.writer, model)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_model(&mut self, model: &Model) -> anyhow::Result<()> {
        serde_yaml::to_writer(&mut self.writer, model)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'w>(
    format: OutputFormat,
    pretty: bool,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer, pretty)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
    }
}
