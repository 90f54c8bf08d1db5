// Copyright 2022 - 2024 Wenmeng See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Author: tickbh
// -----
// Created Date: 2024/06/11 16:08:37

use std::mem;

use super::Direction;

/// 归并排序, 时间复杂度O(n log(n)), 空间复杂度O(n), 稳定排序
/// 自底向上迭代, 段长从1开始每轮翻倍, 相邻两段合并写入辅助缓冲区
/// 每轮结束后交换两个缓冲区的角色, 整个过程只分配一块长度为n的缓冲区
/// 最后一轮结果若不在调用方的存储里, 再整体复制回去
///
/// # Examples
///
/// ```
/// use sortalgo::{merge_sort, Direction};
/// fn main() {
///     let mut arr = vec![5, 3, 1, 4, 2];
///     merge_sort(&mut arr, Direction::Ascending);
///     assert_eq!(arr, vec![1, 2, 3, 4, 5]);
///     merge_sort(&mut arr, Direction::Descending);
///     assert_eq!(arr, vec![5, 4, 3, 2, 1]);
/// }
/// ```
pub fn merge_sort<T: PartialOrd + Clone>(arr: &mut [T], direction: Direction) {
    let len = arr.len();
    if len < 2 {
        return;
    }
    let base = arr.as_ptr();
    let mut aux = arr.to_vec();
    let (mut src, mut dst): (&mut [T], &mut [T]) = (arr, &mut aux);
    let mut seg = 1;
    while seg < len {
        let mut start = 0;
        while start < len {
            let mid = (start + seg).min(len);
            let high = (start + seg * 2).min(len);
            merge_runs(src, dst, start, mid, high, direction);
            start += seg * 2;
        }
        mem::swap(&mut src, &mut dst);
        seg *= 2;
    }
    if src.as_ptr() != base {
        dst.clone_from_slice(src);
    }
}

/// 将src里[low, mid)与[mid, high)两段有序区间按方向合并写入dst
/// 相等时取左段元素, 等值元素保持输入时的相对顺序
fn merge_runs<T: PartialOrd + Clone>(
    src: &[T],
    dst: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    direction: Direction,
) {
    let (mut left, mut right) = (low, mid);
    for k in low..high {
        if right >= high || (left < mid && !direction.out_of_order(&src[left], &src[right])) {
            dst[k] = src[left].clone();
            left += 1;
        } else {
            dst[k] = src[right].clone();
            right += 1;
        }
    }
}
