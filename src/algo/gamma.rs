//! Gamma function pieces needed by the Bessel I algorithms.
//!
//! Only `Γ(1+z)` near the origin and `Γ(1+v)` for the series prefix are
//! required, so the implementation is a convergent Taylor series around
//! 1 (A&S 6.1.33) plus a factorial table, not a general-purpose gamma.

// Tabulated values are kept at the precision they were generated with.
#![allow(clippy::excessive_precision)]

use crate::algo::constants::EULER;
use crate::machine::BesselFloat;

/// ζ(k) − 1 for k = 2, 3, ..., 41.
#[rustfmt::skip]
const ZETA_MINUS_ONE: [f64; 40] = [
    0.644934066848226436472, 0.2020569031595942854,
    0.082323233711138191516, 0.0369277551433699263314,
    0.0173430619844491397145, 0.0083492773819228268398,
    0.00407735619794433937869, 0.00200839282608221441785,
    0.000994575127818085337146, 0.000494188604119464558702,
    0.000246086553308048298638, 0.000122713347578489146752,
    0.0000612481350587048292585, 0.0000305882363070204935517,
    0.0000152822594086518717326, 0.0000076371976378997622736,
    0.00000381729326499983985646, 0.00000190821271655393892566,
    9.53962033872796113152e-7, 4.76932986787806463117e-7,
    2.38450502727732990004e-7, 1.19219925965311073068e-7,
    5.96081890512594796124e-8, 2.98035035146522801861e-8,
    1.49015548283650412347e-8, 7.45071178983542949198e-9,
    3.72533402478845705482e-9, 1.8626597235130490064e-9,
    9.31327432419668182872e-10, 4.65662906503378407299e-10,
    2.328311833676505492e-10, 1.16415501727005197759e-10,
    5.82077208790270088924e-11, 2.91038504449709968693e-11,
    1.45519218910419842359e-11, 7.27595983505748101452e-12,
    3.63797954737865119024e-12, 1.81898965030706594758e-12,
    9.09494784026388928253e-13, 4.5474737830421540268e-13,
];

/// n! for n = 0, 1, ..., 170.
#[rustfmt::skip]
static FACTORIALS: [f64; 171] = [
    1.0, 1.0, 2.0,
    6.0, 24.0, 120.0,
    720.0, 5040.0, 40320.0,
    362880.0, 3628800.0, 39916800.0,
    479001600.0, 6227020800.0, 87178291200.0,
    1307674368000.0, 20922789888000.0, 355687428096000.0,
    6402373705728000.0, 1.21645100408832e+17, 2.43290200817664e+18,
    5.109094217170944e+19, 1.1240007277776077e+21, 2.585201673888498e+22,
    6.204484017332394e+23, 1.5511210043330986e+25, 4.0329146112660565e+26,
    1.0888869450418352e+28, 3.0488834461171387e+29, 8.841761993739702e+30,
    2.6525285981219107e+32, 8.222838654177922e+33, 2.631308369336935e+35,
    8.683317618811886e+36, 2.9523279903960416e+38, 1.0333147966386145e+40,
    3.7199332678990125e+41, 1.3763753091226346e+43, 5.230226174666011e+44,
    2.0397882081197444e+46, 8.159152832478977e+47, 3.345252661316381e+49,
    1.40500611775288e+51, 6.041526306337383e+52, 2.658271574788449e+54,
    1.1962222086548019e+56, 5.502622159812089e+57, 2.5862324151116818e+59,
    1.2413915592536073e+61, 6.082818640342675e+62, 3.0414093201713376e+64,
    1.5511187532873822e+66, 8.065817517094388e+67, 4.2748832840600255e+69,
    2.308436973392414e+71, 1.2696403353658276e+73, 7.109985878048635e+74,
    4.0526919504877214e+76, 2.3505613312828785e+78, 1.3868311854568984e+80,
    8.32098711274139e+81, 5.075802138772248e+83, 3.146997326038794e+85,
    1.98260831540444e+87, 1.2688693218588417e+89, 8.247650592082472e+90,
    5.443449390774431e+92, 3.647111091818868e+94, 2.4800355424368305e+96,
    1.711224524281413e+98, 1.1978571669969892e+100, 8.504785885678623e+101,
    6.1234458376886085e+103, 4.4701154615126844e+105, 3.307885441519386e+107,
    2.48091408113954e+109, 1.8854947016660504e+111, 1.4518309202828587e+113,
    1.1324281178206297e+115, 8.946182130782976e+116, 7.156945704626381e+118,
    5.797126020747368e+120, 4.753643337012842e+122, 3.945523969720659e+124,
    3.314240134565353e+126, 2.81710411438055e+128, 2.4227095383672734e+130,
    2.107757298379528e+132, 1.8548264225739844e+134, 1.650795516090846e+136,
    1.4857159644817615e+138, 1.352001527678403e+140, 1.2438414054641308e+142,
    1.1567725070816416e+144, 1.087366156656743e+146, 1.032997848823906e+148,
    9.916779348709496e+149, 9.619275968248212e+151, 9.426890448883248e+153,
    9.332621544394415e+155, 9.332621544394415e+157, 9.42594775983836e+159,
    9.614466715035127e+161, 9.90290071648618e+163, 1.0299016745145628e+166,
    1.081396758240291e+168, 1.1462805637347084e+170, 1.226520203196138e+172,
    1.324641819451829e+174, 1.4438595832024937e+176, 1.588245541522743e+178,
    1.7629525510902446e+180, 1.974506857221074e+182, 2.2311927486598138e+184,
    2.5435597334721877e+186, 2.925093693493016e+188, 3.393108684451898e+190,
    3.969937160808721e+192, 4.684525849754291e+194, 5.574585761207606e+196,
    6.689502913449127e+198, 8.094298525273444e+200, 9.875044200833601e+202,
    1.214630436702533e+205, 1.506141741511141e+207, 1.882677176888926e+209,
    2.372173242880047e+211, 3.0126600184576594e+213, 3.856204823625804e+215,
    4.974504222477287e+217, 6.466855489220474e+219, 8.47158069087882e+221,
    1.1182486511960043e+224, 1.4872707060906857e+226, 1.9929427461615188e+228,
    2.6904727073180504e+230, 3.659042881952549e+232, 5.012888748274992e+234,
    6.917786472619489e+236, 9.615723196941089e+238, 1.3462012475717526e+241,
    1.898143759076171e+243, 2.695364137888163e+245, 3.854370717180073e+247,
    5.5502938327393044e+249, 8.047926057471992e+251, 1.1749972043909107e+254,
    1.727245890454639e+256, 2.5563239178728654e+258, 3.80892263763057e+260,
    5.713383956445855e+262, 8.62720977423324e+264, 1.3113358856834524e+267,
    2.0063439050956823e+269, 3.0897696138473508e+271, 4.789142901463394e+273,
    7.471062926282894e+275, 1.1729568794264145e+278, 1.853271869493735e+280,
    2.9467022724950384e+282, 4.7147236359920616e+284, 7.590705053947219e+286,
    1.2296942187394494e+289, 2.0044015765453026e+291, 3.287218585534296e+293,
    5.423910666131589e+295, 9.003691705778438e+297, 1.503616514864999e+300,
    2.5260757449731984e+302, 4.269068009004705e+304, 7.257415615307999e+306,
];

/// ln Γ(1+z) for |z| ≤ 1/2.
///
/// Uses `ln Γ(1+z) = −ln(1+z) + z(1−γ) + Σ_{k≥2} (−1)^k (ζ(k)−1) z^k / k`,
/// whose terms shrink like `(z/2)^k`.
pub(crate) fn lgamma1p<T: BesselFloat>(z: T) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);
    let eps = T::MACH_EPSILON;

    let mut sum = T::zero();
    let mut zk = z * z;
    for (i, &c) in ZETA_MINUS_ONE.iter().enumerate() {
        let k = i + 2;
        let mut term = T::from_f64(c / k as f64) * zk;
        if k % 2 == 1 {
            term = -term;
        }
        sum = sum + term;
        if term.abs() < eps * sum.abs() * half {
            break;
        }
        zk = zk * z;
    }

    -z.ln_1p() + z * (one - T::from_f64(EULER)) + sum
}

/// Γ(1+z) − 1 for |z| ≤ 1/2, without cancellation near z = 0.
#[inline]
pub(crate) fn tgamma1pm1<T: BesselFloat>(z: T) -> T {
    lgamma1p(z).exp_m1()
}

/// Γ(1+v) for 0 ≤ v ≤ `T::MAX_FACTORIAL`.
///
/// Integers come straight from the factorial table. Other orders are split
/// as `v = n + u` with |u| ≤ 1/2 and built up from Γ(1+u) by the
/// recurrence Γ(1+u+k) = (u+k) Γ(u+k).
pub(crate) fn tgamma1p<T: BesselFloat>(v: T) -> T {
    let one = T::one();
    let half = T::from_f64(0.5);

    let n = (v + half).floor();
    let u = v - n;

    if u == T::zero() {
        if let Some(k) = n.to_usize() {
            if k <= T::MAX_FACTORIAL as usize {
                return T::from_f64(FACTORIALS[k]);
            }
        }
    }

    let mut g = lgamma1p(u).exp();
    let mut k = one;
    while k <= n {
        g = g * (u + k);
        k = k + one;
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lgamma1p_at_zero_and_half() {
        assert_eq!(lgamma1p(0.0_f64), 0.0);
        // Γ(3/2) = √π / 2
        let expected = (core::f64::consts::PI.sqrt() / 2.0).ln();
        assert!((lgamma1p(0.5_f64) - expected).abs() < 1e-15);
        // Γ(1/2) = √π
        let expected = core::f64::consts::PI.sqrt().ln();
        assert!((lgamma1p(-0.5_f64) - expected).abs() < 1e-15);
    }

    #[test]
    fn tgamma1pm1_small_arguments() {
        // Γ(1+z) − 1 ≈ −γz for tiny z
        let z = 1.0e-10_f64;
        let val = tgamma1pm1(z);
        assert!(((val + EULER * z) / (EULER * z)).abs() < 1e-9);
        assert_eq!(tgamma1pm1(0.0_f64), 0.0);
    }

    #[test]
    fn factorial_table_is_exact_where_representable() {
        let mut f = 1.0_f64;
        for n in 1..=22 {
            f *= n as f64;
            assert_eq!(tgamma1p(n as f64), f, "{n}!");
        }
        assert_eq!(tgamma1p(170.0_f64), 7.257415615307999e306);
    }

    #[test]
    fn non_integer_orders() {
        // Γ(3.25) = 2.549256966718529...
        let val = tgamma1p(2.25_f64);
        assert!((val - 2.5492569667185288).abs() / 2.5492569667185288 < 1e-14);
        // Γ(6.5) = 287.8852778150443...
        let val = tgamma1p(5.5_f64);
        assert!((val - 287.88527781504433).abs() / 287.88527781504433 < 1e-14);
    }

    #[test]
    fn f32_table_stops_at_max_factorial() {
        assert_eq!(tgamma1p(10.0_f32), 3628800.0);
        assert!(tgamma1p(34.0_f32).is_finite());
    }
}
