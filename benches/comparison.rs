//! Benchmarks comparing BlockList with std::Vec using divan.
//!
//! Run with: `cargo bench`

use block_list::{BlockList, Options};

fn main() {
    divan::main();
}

// Trait to abstract over Vec and BlockList for generic benchmarks
trait ListLike<T>: Default {
    fn push(&mut self, val: T);
    fn pop(&mut self) -> Option<T>;
    fn get(&self, idx: usize) -> Option<&T>;
    fn len(&self) -> usize;
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
    fn contains(&self, val: &T) -> bool
    where
        T: PartialEq;
    fn reverse(&mut self);
    fn insert(&mut self, idx: usize, val: T);
    fn remove(&mut self, idx: usize) -> T;
}

impl<T> ListLike<T> for Vec<T> {
    fn push(&mut self, val: T) {
        self.push(val);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn get(&self, idx: usize) -> Option<&T> {
        <[T]>::get(self, idx)
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        <[T]>::iter(self)
    }
    fn contains(&self, val: &T) -> bool
    where
        T: PartialEq,
    {
        <[T]>::contains(self, val)
    }
    fn reverse(&mut self) {
        <[T]>::reverse(self);
    }
    fn insert(&mut self, idx: usize, val: T) {
        self.insert(idx, val);
    }
    fn remove(&mut self, idx: usize) -> T {
        self.remove(idx)
    }
}

impl<T: Default> ListLike<T> for BlockList<T> {
    fn push(&mut self, val: T) {
        self.add(val);
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn get(&self, idx: usize) -> Option<&T> {
        self.get(idx)
    }
    fn len(&self) -> usize {
        self.len()
    }
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        BlockList::iter(self)
    }
    fn contains(&self, val: &T) -> bool
    where
        T: PartialEq,
    {
        BlockList::contains(self, val)
    }
    fn reverse(&mut self) {
        BlockList::reverse(self);
    }
    fn insert(&mut self, idx: usize, val: T) {
        BlockList::insert(self, idx, val).unwrap();
    }
    fn remove(&mut self, idx: usize) -> T {
        self.remove_at(idx).unwrap()
    }
}

fn filled<V: ListLike<i32>>(n: usize) -> V {
    let mut v = V::default();
    for i in 0..n as i32 {
        v.push(i);
    }
    v
}

// ============================================================================
// Push Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn push<V: ListLike<i32>, const N: usize>() -> V {
    filled(N)
}

#[divan::bench(consts = [1, 32, 1024])]
fn push_initial_capacity<const C: usize>() -> BlockList<i32> {
    let mut list = BlockList::with_options(Options::new(C).unwrap());
    for i in 0..10_000 {
        list.add(i);
    }
    list
}

// ============================================================================
// Pop Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn pop<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_values(|mut v| {
            while v.pop().is_some() {}
            v
        });
}

// ============================================================================
// Access Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn sequential_read<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_refs(|v| {
            let mut sum = 0i32;
            for i in 0..N {
                sum = sum.wrapping_add(*v.get(i).unwrap());
            }
            sum
        });
}

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn random_read<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    use rand::prelude::*;
    let mut rng = rand::rng();
    let indices: Vec<usize> = (0..N).map(|_| rng.random_range(0..N)).collect();

    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_refs(|v| {
            let mut sum = 0i32;
            for &i in &indices {
                sum = sum.wrapping_add(*v.get(i).unwrap());
            }
            sum
        });
}

#[divan::bench(consts = [100, 1000, 10000])]
fn cursor_read<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<BlockList<i32>>(N))
        .bench_local_refs(|list| {
            let mut sum = 0i32;
            let mut cursor = list.cursor(0).unwrap();
            while let Some(&x) = cursor.value() {
                sum = sum.wrapping_add(x);
                cursor.inc().unwrap();
            }
            sum
        });
}

// ============================================================================
// Iteration Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn iterate<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_refs(|v| {
            let mut sum = 0i32;
            for &x in v.iter() {
                sum = sum.wrapping_add(x);
            }
            sum
        });
}

// ============================================================================
// Search Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn contains<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_refs(|v| {
            let mut found = 0;
            for x in [0, N as i32 / 2, N as i32 - 1, -1] {
                if v.contains(&x) {
                    found += 1;
                }
            }
            found
        });
}

// ============================================================================
// Modification Benchmarks
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn reverse<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_values(|mut v| {
            v.reverse();
            v
        });
}

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000])]
fn insert_front<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher.bench_local(|| {
        let mut v = V::default();
        for i in 0..N as i32 {
            v.insert(0, i);
        }
        v
    });
}

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000])]
fn remove_front<V: ListLike<i32>, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_values(|mut v| {
            while v.len() > 0 {
                v.remove(0);
            }
            v
        });
}

#[divan::bench(consts = [100, 1000])]
fn insert_middle_indexed<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<BlockList<i32>>(N))
        .bench_local_values(|mut list| {
            for i in 0..N {
                list.insert(N / 2 + i, -1).unwrap();
            }
            list
        });
}

#[divan::bench(consts = [100, 1000])]
fn insert_middle_cursor<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<BlockList<i32>>(N))
        .bench_local_values(|mut list| {
            list.cursor(N / 2).unwrap().insert_range(std::iter::repeat(-1).take(N));
            list
        });
}

// ============================================================================
// Clone Benchmark
// ============================================================================

#[divan::bench(types = [Vec<i32>, BlockList<i32>], consts = [100, 1000, 10000])]
fn clone<V: ListLike<i32> + Clone, const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| filled::<V>(N))
        .bench_local_refs(|v| v.clone());
}

// ============================================================================
// Block Detachment (BlockList's zero-copy hand-off)
// ============================================================================

#[divan::bench(consts = [100, 1000, 10000])]
fn move_to_block<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| BlockList::from_iter_with_options(0..N as i32, Options::new(N).unwrap()))
        .bench_local_values(|mut list| list.move_to_block().unwrap());
}

#[divan::bench(consts = [100, 1000, 10000])]
fn to_vec<const N: usize>(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| BlockList::from_iter_with_options(0..N as i32, Options::new(N).unwrap()))
        .bench_local_refs(|list| list.to_vec());
}
