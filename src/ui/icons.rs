//! Icon classification for directory entries.
//!
//! Every entry is mapped to a Nerd Font symbol by walking [ICON_RULES] top to bottom; the first
//! rule that matches wins and [FILE_ICON] is used when none does. The lookup tables are
//! compile-time `phf` maps, so classification is a pure function of the entry's name and type.
//!
//! Every symbol carries its trailing separator space so it can be prefixed directly to a name.

use crate::core::DirectoryEntry;
use crate::utils::with_lowered_stack;

use phf::phf_map;

/// Symbol for every directory, whatever its name.
pub const DIR_ICON: &str = " ";

/// Symbol for files no rule recognises.
pub const FILE_ICON: &str = " ";

/// Conventional file names with a dedicated symbol.
/// Matched case-sensitively against the whole name, before any extension lookup.
pub(crate) static EXACT_NAME_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "go.mod" => "󰟓 ",
    "go.sum" => "󰟓 ",
    "Dockerfile" => " ",
    "docker-compose.yml" => " ",
    ".dockerignore" => " ",
    "cargo.toml" => " ",
    "Cargo.toml" => " ",
    ".github" => " ",
    ".gitignore" => " ",
    "Makefile" => " ",
};

/// Lowercase file extension (without the dot) to symbol.
pub(crate) static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Documents
    "md" => "󰍔 ",
    "txt" => " ",
    "doc" => "󰈬 ",
    "docx" => "󰈬 ",
    "pdf" => " ",
    "xls" => "󰈛 ",
    "xlsx" => "󰈛 ",
    "ppt" => "󰈧 ",
    "pptx" => "󰈧 ",
    "rtf" => " ",
    "odt" => "󰈬 ",
    "ods" => "󰈛 ",
    "odp" => "󰈧 ",
    "csv" => " ",
    "tsv" => " ",
    "tex" => " ",
    // Web
    "html" => " ",
    "htm" => " ",
    "xml" => "󰗀 ",
    "xhtml" => "󰗀 ",
    "css" => " ",
    "js" => " ",
    "json" => " ",
    "php" => " ",
    "jsp" => " ",
    "mht" => "󰖟 ",
    "mhtml" => "󰖟 ",
    // Source code
    "java" => " ",
    "py" => "󰌠 ",
    "rb" => "󰴭 ",
    "cpp" => "󰙲 ",
    "c" => " ",
    "cs" => " ",
    "go" => " ",
    "swift" => " ",
    "kt" => " ",
    "pl" => " ",
    "r" => " ",
    // Databases
    "sql" => " ",
    "db" => " ",
    "sqlite" => " ",
    // Scripts
    "sh" => " ",
    "bat" => " ",
    "cmd" => " ",
    "ps1" => " ",
    // Java archives
    "jar" => " ",
    "war" => " ",
    "ear" => " ",
    // Executables and packages
    "exe" => "󰨡 ",
    "dll" => "󰨡 ",
    "sys" => "󰨡 ",
    "msi" => "󰨡 ",
    "deb" => " ",
    "rpm" => " ",
    "apk" => "󰀲 ",
    "ipa" => " ",
    "run" => " ",
    "ko" => " ",
    // Disk images
    "iso" => " ",
    "img" => "󰨣 ",
    "bin" => " ",
    "cue" => "󱔼 ",
    "vhd" => "󰋊 ",
    "vmdk" => "󰋊 ",
    "dmg" => "󰋊 ",
    // Archives
    "zip" => "󰿺 ",
    "rar" => "󰿺 ",
    "7z" => "󰿺 ",
    "tar" => "󰿺 ",
    "gz" => "󰿺 ",
    "bz2" => "󰿺 ",
    "xz" => "󰿺 ",
    "zst" => "󰿺 ",
    "cpio" => "󰿺 ",
    // Audio
    "mp3" => "󱑽 ",
    "wav" => "󱑽 ",
    "flac" => "󱑽 ",
    "aac" => "󱑽 ",
    "ogg" => "󱑽 ",
    "wma" => "󱑽 ",
    "m4a" => "󱑽 ",
    "aiff" => "󱑽 ",
    // Video
    "avi" => "󰈫 ",
    "mp4" => "󰈫 ",
    "mkv" => "󰈫 ",
    "mov" => "󰈫 ",
    "wmv" => "󰈫 ",
    "flv" => "󰈫 ",
    "mpeg" => "󰈫 ",
    "mpg" => "󰈫 ",
    "m4v" => "󰈫 ",
    "3gp" => "󰈫 ",
    "3g2" => "󰈫 ",
    "vob" => "󰈫 ",
    "swf" => " ",
    // Images and design
    "svg" => "󰕠 ",
    "png" => " ",
    "jpg" => " ",
    "jpeg" => " ",
    "gif" => " ",
    "bmp" => " ",
    "tiff" => " ",
    "ico" => " ",
    "heic" => " ",
    "psd" => " ",
    "ai" => " ",
    "sketch" => "󰉼 ",
    "xcf" => " ",
    "raw" => "󱨏 ",
    "cdr" => "󰇞 ",
    // Configuration
    "cfg" => " ",
    "ini" => " ",
    "conf" => " ",
    "env" => " ",
    "reg" => " ",
    "desktop" => " ",
    "service" => " ",
    // Contacts and calendars
    "vcf" => " ",
    "ics" => " ",
    // Ebooks
    "mobi" => " ",
    "epub" => " ",
    "azw" => " ",
    // Fonts
    "ttf" => " ",
    "otf" => " ",
    "fon" => " ",
    // Logs, backups and partial files
    "log" => "󱂅 ",
    "bak" => "󰁯 ",
    "part" => "󱑢 ",
    "tmp" => " ",
};

/// One step of the classification cascade.
#[derive(Debug, Clone, Copy)]
pub enum IconRule {
    /// Matches any directory.
    Directory(&'static str),
    /// Matches the whole file name exactly.
    ExactName(&'static phf::Map<&'static str, &'static str>),
    /// Matches the lowercased text after the last dot.
    Extension(&'static phf::Map<&'static str, &'static str>),
}

/// The classification cascade, in priority order.
pub static ICON_RULES: [IconRule; 3] = [
    IconRule::Directory(DIR_ICON),
    IconRule::ExactName(&EXACT_NAME_ICON_MAP),
    IconRule::Extension(&EXT_ICON_MAP),
];

impl IconRule {
    /// Returns the rule's symbol if it applies to an entry with this name and type.
    pub fn apply(&self, name: &str, is_dir: bool) -> Option<&'static str> {
        match *self {
            IconRule::Directory(icon) => is_dir.then_some(icon),
            IconRule::ExactName(map) => map.get(name).copied(),
            IconRule::Extension(map) => {
                let ext = extension(name)?;
                with_lowered_stack(ext, |s| map.get(s).copied())
            }
        }
    }
}

/// Text after the last dot of `name`, if any. A leading dot counts, so `.env` has extension `env`.
fn extension(name: &str) -> Option<&str> {
    let dot_idx = name.rfind('.')?;
    let ext = &name[dot_idx + 1..];
    (!ext.is_empty()).then_some(ext)
}

/// Classifies a bare name and type. See [classify].
pub fn classify_name(name: &str, is_dir: bool) -> &'static str {
    ICON_RULES
        .iter()
        .find_map(|rule| rule.apply(name, is_dir))
        .unwrap_or(FILE_ICON)
}

/// Get the symbol for a directory entry.
/// Directories always get [DIR_ICON]; files are matched by exact name, then by extension,
/// and fall back to [FILE_ICON].
pub fn classify(entry: &DirectoryEntry) -> &'static str {
    classify_name(&entry.name_str(), entry.is_dir())
}

/// The name as displayed in listings: symbol-prefixed when `icons` is on.
pub fn iconify(entry: &DirectoryEntry, icons: bool) -> String {
    let name = entry.name_str();
    if icons {
        let icon = classify(entry);
        let mut out = String::with_capacity(icon.len() + name.len());
        out.push_str(icon);
        out.push_str(&name);
        out
    } else {
        name.into_owned()
    }
}
