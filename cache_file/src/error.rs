//! Error types for cache_file
//! cache_file 错误类型

use std::{collections::TryReserveError, io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("open {path:?}: {source}")]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("alloc cache of {size} bytes: {source}")]
  Alloc {
    size: usize,
    #[source]
    source: TryReserveError,
  },

  #[error("io: {0}")]
  Io(#[from] io::Error),

  #[error("short write at {pos}: {written}/{len}")]
  ShortWrite { pos: u64, len: usize, written: usize },

  #[error("not a regular file")]
  NotRegular,
}

impl Error {
  /// Failed while acquiring the descriptor or the buffer
  /// 获取描述符或缓冲区时失败
  #[inline]
  pub fn is_open_err(&self) -> bool {
    matches!(self, Self::Open { .. } | Self::Alloc { .. })
  }

  /// Failed inside a positioned read / write / close
  /// 定位读、写或关闭时失败
  #[inline]
  pub fn is_io_err(&self) -> bool {
    matches!(self, Self::Io(_) | Self::ShortWrite { .. })
  }
}
