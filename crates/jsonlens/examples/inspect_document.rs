//! Walks a small image-metadata document without materializing it.
//!
//! The document below is parsed once; everything after that happens through
//! lazy views. Member lookups, JSON-Pointer paths, and array searches all
//! read straight out of the parsed tree, and nothing is copied until the
//! final detached snapshot at the end.
//!
//! The example also trips the reparse guard on purpose: while any view from
//! the current parse is alive, the document refuses to parse again rather
//! than silently invalidating it.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonlens --example inspect_document
//! ```

use jsonlens::{Document, Error, Resolved};

const DOCUMENT: &str = r#"{
    "Image": {
        "Width": 800,
        "Height": 600,
        "Title": "View from 15th Floor",
        "Thumbnail": {
            "Url": "http://www.example.com/image/481989943",
            "Height": 125,
            "Width": 100
        },
        "Animated": false,
        "IDs": [116, 943, 234, 38793, 943]
    }
}"#;

fn main() -> Result<(), Error> {
    let mut doc = Document::new();
    let root = doc.parse(DOCUMENT)?;
    let Resolved::Object(top) = root else {
        eprintln!("expected an object at the top level");
        return Ok(());
    };

    // Pointer paths resolve any depth in one call.
    let title = top.pointer("/Image/Title")?;
    println!("title:  {}", title.as_str().unwrap_or("<not a string>"));
    println!(
        "size:   {}x{}",
        top.pointer("/Image/Width")?.as_i64().unwrap_or(0),
        top.pointer("/Image/Height")?.as_i64().unwrap_or(0),
    );

    // Or navigate view by view.
    let Resolved::Object(image) = top.get("Image")? else {
        return Ok(());
    };
    println!("members of Image, in document order:");
    for key in image.keys() {
        println!("  {key}");
    }

    let Resolved::Array(ids) = image.get("IDs")? else {
        return Ok(());
    };
    println!("ids:    {} entries, last is {:?}", ids.len(), ids.get(-1)?);
    println!("943s:   {} (first at index {})", ids.count(943), ids.index_of(943)?);

    // A live view blocks reparsing; drop it and the document is reusable.
    match doc.parse("{}") {
        Err(Error::ReparseWhileLive { live }) => {
            println!("reparse refused while {live} views are alive");
        }
        _ => eprintln!("expected the liveness guard to fire"),
    }
    let snapshot = image.to_map();
    drop((top, image, ids));
    doc.parse("{}")?;

    // The snapshot is detached native data, fine to keep after the reparse.
    println!("snapshot keeps {} members", snapshot.len());
    Ok(())
}
