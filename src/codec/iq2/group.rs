//! Shared 32-value group quantizer used by IQ2_XXS/XS/S. Each super-block
//! (256 elements) is split into 8 groups of 32; each group is a separate
//! weighted least-squares scale search over 4 sub-groups of 8, snapping
//! each sub-group onto the nearest grid point (direct or via the
//! neighbor list) for a trial scale.

use super::init::{GridTables, Lookup};

pub const K_MAX_Q: i32 = 3;
const GROUP_MAX_EPS: f32 = 1e-8;

pub(crate) fn nearest_int(f: f32) -> i32 {
    (f + 0.5 - if f < 0.0 { 1.0 } else { 0.0 }) as i32
}

pub struct GroupResult {
    pub scale: f32,
    pub grid_idx: [usize; 4],
    pub l: [u8; 32],
}

fn snap_subgroup(
    xval: &[f32],
    waux: &[f32],
    tables: &GridTables,
    scale_guess: f32,
    l_guess: &mut [i8; 8],
) -> usize {
    let mut pattern = 0u16;
    for (i, &l) in l_guess.iter().enumerate() {
        pattern |= (l as u16) << (2 * i);
    }
    match tables.lookup(pattern) {
        Lookup::Direct(idx) => {
            for i in 0..8 {
                l_guess[i] = ((tables.grid[idx][i] - 1) / 2) as i8;
            }
            idx
        }
        Lookup::Neighbors(list) => {
            let mut best_d2 = f32::MAX;
            let mut best_idx = 0usize;
            for &cand in list {
                let point = &tables.grid[cand as usize];
                let mut d2 = 0f32;
                for i in 0..8 {
                    let diff = scale_guess * point[i] as f32 - xval[i];
                    d2 += waux[i] * waux[i] * diff * diff;
                }
                if d2 < best_d2 {
                    best_d2 = d2;
                    best_idx = cand as usize;
                }
            }
            for i in 0..8 {
                l_guess[i] = ((tables.grid[best_idx][i] - 1) / 2) as i8;
            }
            best_idx
        }
    }
}

/// `xval`/`weight` are the already sign-rectified (absolute-valued) group
/// values and their importance weights; `waux = sqrt(weight)`, matching
/// the reference's precomputed auxiliary array.
pub fn quantize_group(
    xval: &[f32; 32],
    weight: &[f32; 32],
    waux: &[f32; 32],
    tables: &GridTables,
    is_lo: i32,
    is_hi: i32,
) -> GroupResult {
    let max = xval.iter().cloned().fold(0.0f32, f32::max);
    if max < GROUP_MAX_EPS {
        return GroupResult {
            scale: 0.0,
            grid_idx: [0; 4],
            l: [0u8; 32],
        };
    }

    let denom = (2 * K_MAX_Q - 1) as f32;
    let mut best = 0f32;
    let mut scale = max / denom;
    let mut l_best = [0i8; 32];

    for is in is_lo..=is_hi {
        let id = (denom + is as f32 * 0.1) / max;
        let mut l_trial = [0i8; 32];
        for k in 0..4 {
            let mut sub = [0i8; 8];
            for i in 0..8 {
                let mut l = nearest_int(0.5 * (id * xval[8 * k + i] - 1.0));
                l = l.clamp(0, K_MAX_Q - 1);
                sub[i] = l as i8;
            }
            snap_subgroup(&xval[8 * k..8 * k + 8], &waux[8 * k..8 * k + 8], tables, 1.0 / id, &mut sub);
            l_trial[8 * k..8 * k + 8].copy_from_slice(&sub);
        }

        let mut sumqx = 0f32;
        let mut sumq2 = 0f32;
        for i in 0..32 {
            let q = 2 * l_trial[i] as f32 + 1.0;
            sumqx += weight[i] * xval[i] * q;
            sumq2 += weight[i] * q * q;
        }
        if sumq2 > 0.0 && sumqx * sumqx > best * sumq2 {
            scale = sumqx / sumq2;
            best = scale * sumqx;
            l_best = l_trial;
        }
    }

    if scale > 0.0 {
        let id = 1.0 / scale;
        for k in 0..4 {
            let mut sub = [0i8; 8];
            for i in 0..8 {
                let mut l = nearest_int(0.5 * (id * xval[8 * k + i] - 1.0));
                l = l.clamp(0, K_MAX_Q - 1);
                sub[i] = l as i8;
            }
            snap_subgroup(&xval[8 * k..8 * k + 8], &waux[8 * k..8 * k + 8], tables, scale, &mut sub);
            l_best[8 * k..8 * k + 8].copy_from_slice(&sub);
        }
        let mut sumqx = 0f32;
        let mut sumq2 = 0f32;
        for i in 0..32 {
            let q = 2 * l_best[i] as f32 + 1.0;
            sumqx += weight[i] * xval[i] * q;
            sumq2 += weight[i] * q * q;
        }
        if sumq2 > 0.0 {
            scale = sumqx / sumq2;
        }
    }

    let mut grid_idx = [0usize; 4];
    let mut l_out = [0u8; 32];
    for k in 0..4 {
        let mut pattern = 0u16;
        for i in 0..8 {
            pattern |= (l_best[8 * k + i] as u16) << (2 * i);
            l_out[8 * k + i] = l_best[8 * k + i] as u8;
        }
        grid_idx[k] = match tables.lookup(pattern) {
            Lookup::Direct(idx) => idx,
            Lookup::Neighbors(_) => 0,
        };
    }

    GroupResult {
        scale,
        grid_idx,
        l: l_out,
    }
}

/// Result of quantizing a 16-element sub-block (IQ2_XS/IQ2_S granularity):
/// two independent 8-element grid vectors sharing one scale.
pub struct SubBlockResult {
    pub scale: f32,
    pub grid_idx: [usize; 2],
    pub l: [u8; 16],
}

/// Same search as [`quantize_group`] but over 16 elements split into 2
/// sub-groups of 8 rather than 32 elements split into 4.
pub fn quantize_subblock(
    xval: &[f32; 16],
    weight: &[f32; 16],
    waux: &[f32; 16],
    tables: &GridTables,
    is_lo: i32,
    is_hi: i32,
) -> SubBlockResult {
    let max = xval.iter().cloned().fold(0.0f32, f32::max);
    if max < GROUP_MAX_EPS {
        return SubBlockResult {
            scale: 0.0,
            grid_idx: [0; 2],
            l: [0u8; 16],
        };
    }

    let denom = (2 * K_MAX_Q - 1) as f32;
    let mut best = 0f32;
    let mut scale = max / denom;
    let mut l_best = [0i8; 16];

    for is in is_lo..=is_hi {
        let id = (denom + is as f32 * 0.1) / max;
        let mut l_trial = [0i8; 16];
        for k in 0..2 {
            let mut sub = [0i8; 8];
            for i in 0..8 {
                let mut l = nearest_int(0.5 * (id * xval[8 * k + i] - 1.0));
                l = l.clamp(0, K_MAX_Q - 1);
                sub[i] = l as i8;
            }
            snap_subgroup(&xval[8 * k..8 * k + 8], &waux[8 * k..8 * k + 8], tables, 1.0 / id, &mut sub);
            l_trial[8 * k..8 * k + 8].copy_from_slice(&sub);
        }

        let mut sumqx = 0f32;
        let mut sumq2 = 0f32;
        for i in 0..16 {
            let q = 2 * l_trial[i] as f32 + 1.0;
            sumqx += weight[i] * xval[i] * q;
            sumq2 += weight[i] * q * q;
        }
        if sumq2 > 0.0 && sumqx * sumqx > best * sumq2 {
            scale = sumqx / sumq2;
            best = scale * sumqx;
            l_best = l_trial;
        }
    }

    if scale > 0.0 {
        let id = 1.0 / scale;
        for k in 0..2 {
            let mut sub = [0i8; 8];
            for i in 0..8 {
                let mut l = nearest_int(0.5 * (id * xval[8 * k + i] - 1.0));
                l = l.clamp(0, K_MAX_Q - 1);
                sub[i] = l as i8;
            }
            snap_subgroup(&xval[8 * k..8 * k + 8], &waux[8 * k..8 * k + 8], tables, scale, &mut sub);
            l_best[8 * k..8 * k + 8].copy_from_slice(&sub);
        }
        let mut sumqx = 0f32;
        let mut sumq2 = 0f32;
        for i in 0..16 {
            let q = 2 * l_best[i] as f32 + 1.0;
            sumqx += weight[i] * xval[i] * q;
            sumq2 += weight[i] * q * q;
        }
        if sumq2 > 0.0 {
            scale = sumqx / sumq2;
        }
    }

    let mut grid_idx = [0usize; 2];
    let mut l_out = [0u8; 16];
    for k in 0..2 {
        let mut pattern = 0u16;
        for i in 0..8 {
            pattern |= (l_best[8 * k + i] as u16) << (2 * i);
            l_out[8 * k + i] = l_best[8 * k + i] as u8;
        }
        grid_idx[k] = match tables.lookup(pattern) {
            Lookup::Direct(idx) => idx,
            Lookup::Neighbors(_) => 0,
        };
    }

    SubBlockResult {
        scale,
        grid_idx,
        l: l_out,
    }
}
