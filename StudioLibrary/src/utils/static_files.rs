use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static_files/"]
pub struct StaticFiles;
