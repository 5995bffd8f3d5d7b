//! SHA-256 round primitives, message-schedule expansion and round loop.
//!
//! All arithmetic is on `u32` words; additions wrap modulo 2³², which is
//! what the algorithm requires.

use super::K256;

#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Fills `w[16..64]` from the sixteen block words already in `w[..16]`.
///
/// Each word only reads indices below its own, so a single forward pass
/// never touches an unpopulated slot.
pub fn expand_schedule(w: &mut [u32; 64]) {
    for i in 16..64 {
        let s0 = small_sigma0(w[i - 15]);
        let s1 = small_sigma1(w[i - 2]);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }
}

/// Runs the 64 rounds over an expanded schedule and feeds the result
/// forward into `state`.
#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for (&wi, &ki) in w.iter().zip(K256.iter()) {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(ki)
            .wrapping_add(wi);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    feed_forward(state, [a, b, c, d, e, f, g, h]);
}

/// Unrolled variant of the round loop. Produces the same state as the
/// looped version.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 8], w: &[u32; 64]) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($i:expr) => {{
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(K256[$i])
                .wrapping_add(w[$i]);

            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }};
    }

    R!(0); R!(1); R!(2); R!(3); R!(4); R!(5); R!(6); R!(7);
    R!(8); R!(9); R!(10); R!(11); R!(12); R!(13); R!(14); R!(15);

    R!(16); R!(17); R!(18); R!(19); R!(20); R!(21); R!(22); R!(23);
    R!(24); R!(25); R!(26); R!(27); R!(28); R!(29); R!(30); R!(31);

    R!(32); R!(33); R!(34); R!(35); R!(36); R!(37); R!(38); R!(39);
    R!(40); R!(41); R!(42); R!(43); R!(44); R!(45); R!(46); R!(47);

    R!(48); R!(49); R!(50); R!(51); R!(52); R!(53); R!(54); R!(55);
    R!(56); R!(57); R!(58); R!(59); R!(60); R!(61); R!(62); R!(63);

    feed_forward(state, [a, b, c, d, e, f, g, h]);
}

#[inline(always)]
fn feed_forward(state: &mut [u32; 8], working: [u32; 8]) {
    for (s, v) in state.iter_mut().zip(working) {
        *s = s.wrapping_add(v);
    }
}
