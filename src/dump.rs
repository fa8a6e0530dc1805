//! Text dump — render grouped collections for diagnostic output.
//!
//! ```text
//! [Box<dyn AnyContainers>] → write_dump() → header + Container/Matrix/Position/Point tree
//! ```
//!
//! The layout is the `Display` rendering of each collection and is meant
//! for humans; nothing reads it back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::model::AnyContainers;
use crate::Result;

/// Write a header and the rendering of every collection, in order.
pub fn write_dump(collections: &[Box<dyn AnyContainers>], writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "// containers-model dump")?;
    writeln!(writer, "// Collections: {}", collections.len())?;

    for (i, collection) in collections.iter().enumerate() {
        writeln!(writer)?;
        writeln!(
            writer,
            "// Collection{i}: {} containers of {}",
            collection.len(),
            collection.scalar_name()
        )?;
        write!(writer, "{collection}")?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write the dump into it.
pub fn dump_to_file(collections: &[Box<dyn AnyContainers>], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_dump(collections, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), collections = collections.len(), "dump written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, Containers, Matrix, Point1D, Position1D};

    #[test]
    fn test_dump_layout() {
        let m = Matrix::new(vec![Position1D::new(vec![Point1D::new(5)])]).unwrap();
        let cs = Containers::new(vec![Container::new(vec![m]).unwrap()]).unwrap();
        let list = crate::containers_list![cs];

        let mut out = Vec::new();
        write_dump(&list, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "// containers-model dump\n\
                        // Collections: 1\n\
                        \n\
                        // Collection0: 1 containers of i32\n\
                        Container0\n\
                        \tMatrix0\n\
                        \t\tPosition0\n\
                        \t\t\tPoint0 [X:5]\n\
                        \n\
                        \n\
                        \n";
        assert_eq!(text, expected);
    }
}
