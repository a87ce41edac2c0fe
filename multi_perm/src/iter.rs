//! Enumerate valid access vectors / 枚举合法访问向量

/// Every multi-permutation of a block-size vector, lexicographic order,
/// slot 0 most significant
/// 按字典序枚举所有多排列，槽位 0 为最高位
#[derive(Clone, Debug)]
pub struct AccessIter {
  blocks: Box<[usize]>,
  cur: Option<Vec<i32>>,
}

impl AccessIter {
  /// Empty `blocks` yields nothing
  /// 空 `blocks` 不产生任何元素
  pub fn new(blocks: &[usize]) -> Self {
    let cur = (!blocks.is_empty()).then(|| {
      blocks
        .iter()
        .flat_map(|&k| 0..k as i32)
        .collect::<Vec<_>>()
    });
    Self {
      blocks: blocks.into(),
      cur,
    }
  }
}

impl Iterator for AccessIter {
  type Item = Vec<i32>;

  fn next(&mut self) -> Option<Vec<i32>> {
    let cur = self.cur.as_mut()?;
    let out = cur.clone();

    // odometer: advance the last slot, carry leftwards on wrap
    let mut end = cur.len();
    let mut advanced = false;
    for &k in self.blocks.iter().rev() {
      if next_perm(&mut cur[end - k..end]) {
        advanced = true;
        break;
      }
      end -= k;
    }
    if !advanced {
      self.cur = None;
    }
    Some(out)
  }
}

/// Next lexicographic permutation in place; on the last one, resets to
/// ascending order and returns false
/// 原地生成下一个字典序排列；已是最后一个时复位为升序并返回 false
fn next_perm(seg: &mut [i32]) -> bool {
  let n = seg.len();
  if n < 2 {
    return false;
  }
  let mut i = n - 1;
  while i > 0 && seg[i - 1] >= seg[i] {
    i -= 1;
  }
  if i == 0 {
    seg.reverse();
    return false;
  }
  let mut j = n - 1;
  while seg[j] <= seg[i - 1] {
    j -= 1;
  }
  seg.swap(i - 1, j);
  seg[i..].reverse();
  true
}
