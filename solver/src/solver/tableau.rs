/// Butcher tableau of an embedded explicit Runge-Kutta pair.
///
/// `b` is the propagating solution of order `order`, `b_star` the
/// embedded lower-order solution used for the error estimate. `d`, when
/// present, holds the dense output coefficients of the pair's quartic
/// interpolant.
pub struct ButcherTableau<const STAGES: usize> {
    pub a: [[f64; STAGES]; STAGES],
    pub b: [f64; STAGES],
    pub b_star: [f64; STAGES],
    pub c: [f64; STAGES],
    pub d: Option<[f64; STAGES]>,
    pub order: usize,
}

impl ButcherTableau<7> {
    // usage is ButcherTableau::<7>::DORMAND_PRINCE_45
    pub const DORMAND_PRINCE_45: Self = Self {
        a: [
            [0., 0., 0., 0., 0., 0., 0.],
            [1. / 5., 0., 0., 0., 0., 0., 0.],
            [3. / 40., 9. / 40., 0., 0., 0., 0., 0.],
            [44. / 45., -56. / 15., 32. / 9., 0., 0., 0., 0.],
            [
                19372. / 6561.,
                -25360. / 2187.,
                64448. / 6561.,
                -212. / 729.,
                0.,
                0.,
                0.,
            ],
            [
                9017. / 3168.,
                -355. / 33.,
                46732. / 5247.,
                49. / 176.,
                -5103. / 18656.,
                0.,
                0.,
            ],
            [
                35. / 384.,
                0.,
                500. / 1113.,
                125. / 192.,
                -2187. / 6784.,
                11. / 84.,
                0.,
            ],
        ],
        b: [
            35. / 384.,
            0.,
            500. / 1113.,
            125. / 192.,
            -2187. / 6784.,
            11. / 84.,
            0.,
        ],
        b_star: [
            5179. / 57600.,
            0.,
            7571. / 16695.,
            393. / 640.,
            -92097. / 339200.,
            187. / 2100.,
            1. / 40.,
        ],
        c: [0., 1. / 5., 3. / 10., 4. / 5., 8. / 9., 1., 1.],
        d: Some([
            -12715105075. / 11282082432.,
            0.,
            87487479700. / 32700410799.,
            -10690763975. / 1880347072.,
            701980252875. / 199316789632.,
            -1453857185. / 822651844.,
            69997945. / 29380423.,
        ]),
        order: 5,
    };
}

impl ButcherTableau<4> {
    // usage is ButcherTableau::<4>::BOGACKI_SHAMPINE_23
    pub const BOGACKI_SHAMPINE_23: Self = Self {
        a: [
            [0., 0., 0., 0.],
            [1. / 2., 0., 0., 0.],
            [0., 3. / 4., 0., 0.],
            [2. / 9., 1. / 3., 4. / 9., 0.],
        ],
        b: [2. / 9., 1. / 3., 4. / 9., 0.],
        b_star: [7. / 24., 1. / 4., 1. / 3., 1. / 8.],
        c: [0., 1. / 2., 3. / 4., 1.],
        d: None,
        order: 3,
    };
}
