#![cfg_attr(docsrs, feature(doc_cfg))]

//! cache_file - Single-block write-back cache over a file
//! 单块回写文件缓存
//!
//! One fixed-size buffer mirrors a window `[start, end)` of the file.
//! Reads, writes and seeks inside the window touch memory only; leaving it
//! writes dirty bytes back and loads the next window.
//! 一个固定大小的缓冲区映射文件窗口 `[start, end)`。
//! 窗口内的读、写、定位只访问内存；离开窗口时回写脏数据并加载下一个窗口。

mod conf;
pub mod consts;
mod error;
mod fd;
mod file;
mod stats;
mod window;

pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use fd::{Fd, Stat, open_read_write_create};
pub use file::CachedFile;
pub use stats::Stats;
