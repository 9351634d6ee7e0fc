//! In-memory descriptor with fault injection
//! 带故障注入的内存描述符

#![allow(dead_code)]

use std::{cell::RefCell, io, rc::Rc};

use cache_file::{Fd, Stat};
use compio::BufResult;

pub struct State {
  pub data: Vec<u8>,
  pub regular: bool,
  pub fail_read: bool,
  pub fail_write: bool,
  /// Cap bytes per write to simulate short writes
  /// 限制每次写入的字节数以模拟少写
  pub write_limit: Option<usize>,
  pub reads: usize,
  pub writes: usize,
  pub syncs: usize,
  pub closed: bool,
}

/// Clones share the same state, keep one to inspect after handing the other over
/// 克隆共享同一状态，交出一个后可用另一个检查
#[derive(Clone)]
pub struct MemFd(pub Rc<RefCell<State>>);

impl MemFd {
  pub fn new() -> Self {
    Self::with(Vec::new())
  }

  pub fn with(data: impl Into<Vec<u8>>) -> Self {
    Self(Rc::new(RefCell::new(State {
      data: data.into(),
      regular: true,
      fail_read: false,
      fail_write: false,
      write_limit: None,
      reads: 0,
      writes: 0,
      syncs: 0,
      closed: false,
    })))
  }

  pub fn state(&self) -> std::cell::RefMut<'_, State> {
    self.0.borrow_mut()
  }

  pub fn data(&self) -> Vec<u8> {
    self.0.borrow().data.clone()
  }
}

impl Fd for MemFd {
  async fn pread(&self, mut buf: Vec<u8>, len: usize, pos: u64) -> BufResult<usize, Vec<u8>> {
    let mut s = self.0.borrow_mut();
    s.reads += 1;
    if s.fail_read {
      return BufResult(Err(io::Error::other("injected read failure")), buf);
    }
    let pos = pos as usize;
    let n = s.data.len().saturating_sub(pos).min(len);
    if n > 0 {
      buf[..n].copy_from_slice(&s.data[pos..pos + n]);
    }
    BufResult(Ok(n), buf)
  }

  async fn pwrite(&mut self, buf: Vec<u8>, len: usize, pos: u64) -> BufResult<usize, Vec<u8>> {
    let mut s = self.0.borrow_mut();
    s.writes += 1;
    if s.fail_write {
      return BufResult(Err(io::Error::other("injected write failure")), buf);
    }
    let n = s.write_limit.map_or(len, |limit| limit.min(len));
    let pos = pos as usize;
    if s.data.len() < pos + n {
      s.data.resize(pos + n, 0);
    }
    s.data[pos..pos + n].copy_from_slice(&buf[..n]);
    BufResult(Ok(n), buf)
  }

  async fn stat(&self) -> io::Result<Stat> {
    let s = self.0.borrow();
    Ok(Stat {
      len: s.data.len() as u64,
      regular: s.regular,
    })
  }

  async fn sync_all(&self) -> io::Result<()> {
    self.0.borrow_mut().syncs += 1;
    Ok(())
  }

  async fn close(self) -> io::Result<()> {
    self.0.borrow_mut().closed = true;
    Ok(())
  }
}
