// src/config/consts.rs

// Input
pub const DEFAULT_CSV_PATH: &str = "data/routine.csv";

// Column names in the Notion export
pub const COL_NAME: &str = "이름";
pub const COL_VELOG_TITLE: &str = "VelogTitle";
pub const COL_TITLE: &str = "Title";
pub const COL_DATE: &str = "Date";
pub const COL_BODY: &str = "VelogBody";
pub const COL_STATUS: &str = "Status";
pub const COL_CHECKLIST: &str = "Checklist";
pub const COL_NOTION_LINK: &str = "NotionLink";

pub const DEFAULT_STATUS: &str = "Not Started";

// Routine
pub const TOTAL_DAYS: u32 = 84;
pub const DAYS_PER_WEEK: u32 = 7;
pub const ROUTINE_NAME: &str = "React + TypeScript 84일 루틴";
/// Routine line in the quote block of exported notes.
pub const NOTE_ROUTINE_LABEL: &str = "React + TypeScript 84일 학습";

// Output
pub const PUBLIC_OUT_DIR: &str = "docs";
pub const PRIVATE_OUT_DIR: &str = "docs_private_noindex";
pub const DEFAULT_NOTES_DIR: &str = "notes";
pub const DEFAULT_NOTES_ZIP: &str = "notion/notion_md_from_csv.zip";
pub const INDEX_FILE: &str = "index.html";
pub const ROBOTS_FILE: &str = "robots.txt";
pub const SITEMAP_FILE: &str = "sitemap.xml";

// Navigation injection
pub const NAV_MARKER: &str = "<!--__BACK_TO_INDEX_BUTTON__-->";
pub const NAV_LABEL: &str = "목록으로 돌아가기";
pub const NAV_STYLE: &str = concat!(
    "display:inline-block;",
    "margin:10px 0 18px;",
    "padding:8px 14px;",
    "background:#2563eb;",
    "color:#fff;",
    "border-radius:8px;",
    "text-decoration:none;",
    "font-weight:600;",
);

// Client side
pub const PROGRESS_STORAGE_KEY: &str = "completed-days";
pub const MARKED_JS_URL: &str = "https://cdn.jsdelivr.net/npm/marked@11.1.1/marked.min.js";
pub const VELOG_WRITE_URL: &str = "https://velog.io/write";
