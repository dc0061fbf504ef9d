//! Example: decoding a catalog page.
//!
//! Decodes a collection document the way it comes back from
//! `GET /api/edge/anime` and prints the entries along with the offset of
//! the next page.
//!
//! Run with: cargo run --example decode_catalog
//! Set RUST_LOG=kitsu_document=trace to see the codec at work.

use kitsu_document::types::Anime;
use kitsu_document::codec;

const PAGE: &str = r#"{
    "data": [
        {"type": "anime", "id": "7442", "attributes": {"slug": "attack-on-titan", "showType": "TV"}},
        {"type": "anime", "id": "1376", "attributes": {"slug": "death-note", "showType": "TV"}}
    ],
    "links": {
        "first": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=2&page%5Boffset%5D=0",
        "next": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=2&page%5Boffset%5D=2",
        "last": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=2&page%5Boffset%5D=498"
    }
}"#;

fn main() -> kitsu_document::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (anime, offset) = codec::decode_many::<_, Anime>(PAGE.as_bytes())?;

    for entry in &anime {
        println!("{}: {} ({})", entry.id, entry.slug, entry.show_type);
    }
    println!("next page starts at offset {}", offset.next);

    Ok(())
}
