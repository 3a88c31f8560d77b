//! Lazy construction of the kmap/neighbor-list side tables for a grid.
//!
//! `kmap` maps a packed 16-bit pattern (`2 bits * 8 coordinates`, each
//! coordinate `{0,1,2,3}` standing in for `{1,3,5,7}`) to either a direct
//! grid index (`Ok`) or the neighbor list to search instead (`Err`), the
//! same split the reference keeps by sign of a single `i32` map slot.

use std::collections::HashMap;
use std::sync::OnceLock;

pub struct GridTables {
    pub grid: &'static [[u8; 8]],
    kmap: HashMap<u16, i32>,
    neighbors: Vec<Vec<u16>>,
}

impl GridTables {
    /// Resolve a packed pattern to a grid index directly, or the neighbor
    /// list to search against `xval`/`weight` instead.
    pub fn lookup(&self, pattern: u16) -> Lookup<'_> {
        match self.kmap.get(&pattern) {
            Some(&idx) if idx >= 0 => Lookup::Direct(idx as usize),
            Some(&idx) => Lookup::Neighbors(&self.neighbors[(-idx - 1) as usize]),
            None => Lookup::Neighbors(&[]),
        }
    }
}

pub enum Lookup<'a> {
    Direct(usize),
    Neighbors(&'a [u16]),
}

const NWANT: usize = 2;

fn pattern_of(point: &[u8; 8]) -> u16 {
    let mut idx = 0u16;
    for (k, &q) in point.iter().enumerate() {
        let l = ((q - 1) / 2) as u16;
        idx |= l << (2 * k);
    }
    idx
}

fn build(grid: &'static [[u8; 8]]) -> GridTables {
    let mut kmap: HashMap<u16, i32> = HashMap::new();
    for (i, point) in grid.iter().enumerate() {
        kmap.insert(pattern_of(point), i as i32);
    }

    let mut neighbors: Vec<Vec<u16>> = Vec::new();
    // Every unmapped pattern in the 16-bit space gets a neighbor list; the
    // reference only allocates for patterns that occur during search, but
    // building it eagerly for the full 65536-entry space is simpler and the
    // table is rebuilt at most once per process (cached behind a OnceLock).
    for raw in 0u32..=0xFFFF {
        let pattern = raw as u16;
        if kmap.contains_key(&pattern) {
            continue;
        }
        let mut pos = [0i32; 8];
        for k in 0..8 {
            let l = (raw >> (2 * k)) & 0x3;
            pos[k] = 2 * l as i32 + 1;
        }

        let mut dist: Vec<(i32, u16)> = grid
            .iter()
            .enumerate()
            .map(|(j, point)| {
                let d2: i32 = point
                    .iter()
                    .zip(pos.iter())
                    .map(|(&g, &p)| {
                        let diff = g as i32 - p;
                        diff * diff
                    })
                    .sum();
                (d2, j as u16)
            })
            .collect();
        dist.sort_by_key(|&(d2, _)| d2);

        let mut list = Vec::new();
        let mut d2_prev = dist[0].0;
        let mut nhave = 1;
        for &(d2, j) in &dist {
            if d2 > d2_prev {
                if nhave == NWANT {
                    break;
                }
                d2_prev = d2;
                nhave += 1;
            }
            list.push(j);
        }

        kmap.insert(pattern, -(neighbors.len() as i32 + 1));
        neighbors.push(list);
    }

    GridTables { grid, kmap, neighbors }
}

static XXS: OnceLock<GridTables> = OnceLock::new();
static XS: OnceLock<GridTables> = OnceLock::new();
static S: OnceLock<GridTables> = OnceLock::new();

pub fn xxs_tables() -> &'static GridTables {
    XXS.get_or_init(|| build(&super::tables::GRID_XXS))
}

pub fn xs_tables() -> &'static GridTables {
    XS.get_or_init(|| build(&super::tables::GRID_XS))
}

pub fn s_tables() -> &'static GridTables {
    S.get_or_init(|| build(&super::tables::GRID_S))
}
