use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};

/// Core PDF Objects based on PDF Reference 1.7
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(Vec<(String, PdfObject)>),
    Stream(Vec<(String, PdfObject)>, Vec<u8>), // Dictionary + Content
    Reference(u32), // Indirect Object Reference (id)
}

impl PdfObject {
    pub fn name(name: &str) -> Self {
        PdfObject::Name(name.to_string())
    }

    /// Array of reals, e.g. `[0 1]` for a domain
    pub fn reals(values: &[f64]) -> Self {
        PdfObject::Array(values.iter().map(|v| PdfObject::Real(*v)).collect())
    }

    pub fn dict(entries: Vec<(&str, PdfObject)>) -> Self {
        PdfObject::Dictionary(
            entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        )
    }

    /// Looks up a dictionary (or stream dictionary) entry
    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        match self {
            PdfObject::Dictionary(entries) | PdfObject::Stream(entries, _) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    /// Serializes the object to the writer
    pub fn serialize<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            PdfObject::Boolean(b) => write!(w, "{}", b),
            PdfObject::Integer(i) => write!(w, "{}", i),
            PdfObject::Real(r) => write!(w, "{}", format_real(*r)),
            PdfObject::Name(n) => write!(w, "/{}", n),
            PdfObject::Array(arr) => {
                write!(w, "[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 { write!(w, " ")?; }
                    obj.serialize(w)?;
                }
                write!(w, "]")
            }
            PdfObject::Dictionary(dict) => {
                write!(w, "<<")?;
                for (key, val) in dict {
                    write!(w, " /{} ", key)?;
                    val.serialize(w)?;
                }
                write!(w, " >>")
            }
            PdfObject::Stream(dict, content) => {
                write!(w, "<<")?;
                for (key, val) in dict {
                    write!(w, " /{} ", key)?;
                    val.serialize(w)?;
                }
                // Length always reflects the actual content
                write!(w, " /Length {} >>\nstream\n", content.len())?;
                w.write_all(content)?;
                write!(w, "\nendstream")
            }
            PdfObject::Reference(id) => write!(w, "{} 0 R", id),
        }
    }

    /// Serializes into an owned string (streams are written lossily)
    pub fn to_pdf_string(&self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec cannot fail
        self.serialize(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// PDF has no exponent notation and no NaN; keep at most 6 decimals.
fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let text = format!("{:.6}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

pub trait WriteSeek: Write + Seek {}
impl<T: Write + Seek> WriteSeek for T {}

pub struct PdfWriter<W: WriteSeek = Box<dyn WriteSeek>> {
    writer: BufWriter<W>,
    offset: u64,
    pub(crate) xref: Vec<(u32, u64)>, // id -> offset
}

impl<W: WriteSeek> PdfWriter<W> {
    pub fn new(writer: W) -> io::Result<Self> {
        let mut writer = BufWriter::with_capacity(64 * 1024, writer); // 64KB buffer

        // Write Header
        let header = b"%PDF-1.7\n%\x93\x8C\x8B\x9E\n"; // Binary comment to indicate binary file
        writer.write_all(header)?;
        writer.flush()?;
        let offset = writer.stream_position()?;

        Ok(PdfWriter {
            writer,
            offset,
            xref: Vec::new(),
        })
    }

    pub fn write_object(&mut self, id: u32, object: &PdfObject) -> io::Result<()> {
        self.xref.push((id, self.offset));

        write!(self.writer, "{} 0 obj\n", id)?;
        object.serialize(&mut self.writer)?;
        write!(self.writer, "\nendobj\n")?;

        // xref needs exact byte positions
        self.writer.flush()?;
        self.offset = self.writer.stream_position()?;

        Ok(())
    }

    pub fn write_xref_and_trailer(&mut self, root_id: u32) -> io::Result<()> {
        let xref_offset = self.offset;

        // The table must follow object numbering (1, 2, 3...) whatever the write order
        self.xref.sort_by_key(|&(id, _)| id);

        writeln!(self.writer, "xref")?;
        writeln!(self.writer, "0 {}", self.xref.len() + 1)?; // +1 for the 0th object
        writeln!(self.writer, "0000000000 65535 f ")?;
        for (_id, offset) in &self.xref {
            writeln!(self.writer, "{:010} 00000 n ", offset)?;
        }

        writeln!(self.writer, "trailer")?;
        write!(self.writer, "<< /Size {} /Root {} 0 R >>", self.xref.len() + 1, root_id)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_offset)?;
        writeln!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(())
    }

    /// Gives back the underlying sink (e.g. an in-memory cursor)
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl PdfWriter<Box<dyn WriteSeek>> {
    pub fn from_path(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::new(Box::new(file))
    }
}
