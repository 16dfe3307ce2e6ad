/// Folders created under every new project, relative to the project root.
///
/// Other tools expect exactly this layout; entries are kept byte-for-byte,
/// including the trailing slash on the Blender data folder.
pub const STANDARD_SUB_TREE: [&str; 13] = [
    "00_Assets/Textures",
    "00_Assets/Models",
    "00_Assets/Audio",
    "00_Assets/Cache",
    "01_Data/00_Houdini/Bgeo",
    "01_Data/00_Houdini/Hip",
    "01_Data/01_Blender/",
    "01_Data/03_AfterEffects/Source",
    "01_Data/04_DavinciResolve/Source",
    "02_Exports/Drafts",
    "02_Exports/Final",
    "03_Scripts",
    "04_Client",
];

/// Placeholder file written once at project creation.
pub const README_FILE: &str = "README.md";

/// Content of the placeholder README.
pub const README_CONTENT: &str = "# Project description and instructions";

/// The standard sub-tree, in creation order.
pub fn standard_sub_tree() -> &'static [&'static str] {
    &STANDARD_SUB_TREE
}
