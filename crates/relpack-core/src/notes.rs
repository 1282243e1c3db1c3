//! Bilingual changelog template generation.
//!
//! Pure string templating: the only varying inputs are the version, the
//! current date, and the two bundle file names. Two runs with the same
//! version produce byte-identical output except for the date line.

use crate::Result;
use crate::config::PackageConfig;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Chinese changelog file name.
pub const NOTE_ZH_FILE: &str = "release_note_zh.txt";

/// English changelog file name.
pub const NOTE_EN_FILE: &str = "release_note_en.txt";

/// Paths of the two written changelog files.
#[derive(Debug, Clone)]
pub struct ReleaseNotes {
    /// Chinese changelog path.
    pub zh: PathBuf,

    /// English changelog path.
    pub en: PathBuf,
}

/// Writes both changelog templates into the release directory, dated today.
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn write_release_notes(
    release_dir: &Path,
    version: &str,
    config: &PackageConfig,
) -> Result<ReleaseNotes> {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();

    let zh = release_dir.join(NOTE_ZH_FILE);
    let en = release_dir.join(NOTE_EN_FILE);

    fs::write(&zh, render_zh(config, version, &date))?;
    fs::write(&en, render_en(config, version, &date))?;

    Ok(ReleaseNotes { zh, en })
}

/// Renders the Chinese changelog template.
#[must_use]
pub fn render_zh(config: &PackageConfig, version: &str, date: &str) -> String {
    let display = &config.display_name;
    let install = config.install_bundle_name(version);
    let source = config.source_bundle_name(version);

    format!(
        "# {display} v{version} 更新日志\n\
         \n\
         发布日期: {date}\n\
         \n\
         ## 下载文件\n\
         - 安装包: {install}\n\
         - 源码包: {source}\n\
         \n\
         ## 更新内容\n\
         \n\
         ### 新功能\n\
         - [请在此处填写新功能]\n\
         \n\
         ### 优化\n\
         - [请在此处填写优化内容]\n\
         \n\
         ### 修复\n\
         - [请在此处填写修复的问题]\n\
         \n\
         ## 安装说明\n\
         1. 下载 Install.zip 并解压\n\
         2. 打开 Chrome 浏览器，访问 chrome://extensions/\n\
         3. 开启\"开发者模式\"\n\
         4. 点击\"加载已解压的扩展程序\"\n\
         5. 选择解压后的文件夹\n\
         \n\
         ## 系统要求\n\
         - Chrome 88+ / Edge 88+ / Brave 1.20+\n\
         - Windows 7+ / macOS 10.12+ / Linux\n\
         \n\
         ---\n\
         {display} - 专业的视频下载扩展\n"
    )
}

/// Renders the English changelog template.
#[must_use]
pub fn render_en(config: &PackageConfig, version: &str, date: &str) -> String {
    let display = &config.display_name;
    let install = config.install_bundle_name(version);
    let source = config.source_bundle_name(version);

    format!(
        "# {display} v{version} Release Notes\n\
         \n\
         Release Date: {date}\n\
         \n\
         ## Download Files\n\
         - Install Package: {install}\n\
         - Source Code: {source}\n\
         \n\
         ## What's New\n\
         \n\
         ### New Features\n\
         - [Add new features here]\n\
         \n\
         ### Improvements\n\
         - [Add improvements here]\n\
         \n\
         ### Bug Fixes\n\
         - [Add bug fixes here]\n\
         \n\
         ## Installation\n\
         1. Download and extract Install.zip\n\
         2. Open Chrome and go to chrome://extensions/\n\
         3. Enable \"Developer mode\"\n\
         4. Click \"Load unpacked\"\n\
         5. Select the extracted folder\n\
         \n\
         ## System Requirements\n\
         - Chrome 88+ / Edge 88+ / Brave 1.20+\n\
         - Windows 7+ / macOS 10.12+ / Linux\n\
         \n\
         ---\n\
         {display} - Professional Video Downloader Extension\n"
    )
}
