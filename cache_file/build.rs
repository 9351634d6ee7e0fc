use std::{env, fs, path::Path};

use anyhow::{Context, Result, ensure};

/// Read `key` from env with a lower bound
/// 从环境变量读取 `key`，带下限
fn env_usize(key: &str, default: usize, min: usize) -> Result<usize> {
  println!("cargo:rerun-if-env-changed={key}");
  let n = match env::var(key) {
    Ok(val) => val
      .parse::<usize>()
      .with_context(|| format!("{key} must be a number, get: {val}"))?,
    Err(_) => default,
  };
  ensure!(n >= min, "{key} should not be below {min}, get: {n}");
  Ok(n)
}

/// Each entry becomes `pub const KEY: usize` in `$OUT_DIR/<module>.rs`
/// 每项生成 `$OUT_DIR/<module>.rs` 中的 `pub const KEY: usize`
macro_rules! consts {
  ( $module:ident : { $( $key:ident : $default:expr, min $min:expr ),* $(,)? } ) => {{
    let mut content = String::new();
    $(
      let n = env_usize(stringify!($key), $default, $min)?;
      content.push_str(&format!("pub const {}: usize = {};\n", stringify!($key), n));
    )*
    let out_dir = env::var_os("OUT_DIR").context("OUT_DIR not found")?;
    let dest = Path::new(&out_dir).join(concat!(stringify!($module), ".rs"));
    // Skip rewrite when unchanged
    // 内容未变则不改写
    if fs::read_to_string(&dest).ok().as_deref() != Some(content.as_str()) {
      fs::write(&dest, content).with_context(|| format!("Failed to write {}", dest.display()))?;
    }
  }};
}

fn main() -> Result<()> {
  consts!(consts: {
    CACHE_SIZE: 4096, min 4,
  });
  Ok(())
}
