use crate::dynamics::state::State;

/// Rod length (both rods).
pub const ROD_LENGTH: f64 = 1.0;

/// Cartesian positions of the two point masses, pivot at the origin, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RodTips {
    pub elbow: [f64; 2], // end of the inner rod
    pub tip: [f64; 2],   // end of the outer rod
}

pub fn tips(state: &State) -> RodTips {
    let (sx, cx) = state.x().sin_cos();
    let (sy, cy) = state.y().sin_cos();
    let elbow = [ROD_LENGTH * sx, -ROD_LENGTH * cx];
    let tip = [elbow[0] + ROD_LENGTH * sy, elbow[1] - ROD_LENGTH * cy];
    RodTips { elbow, tip }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dist(a: [f64; 2], b: [f64; 2]) -> f64 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
    }

    #[test]
    fn hanging_straight_down() {
        let t = tips(&State::new(0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(t.elbow, [0.0, -1.0]);
        assert_eq!(t.tip, [0.0, -2.0]);
    }

    #[test]
    fn rods_keep_their_length() {
        for &(x, y) in &[(1.5, 2.25), (-3.0, 7.0), (12.0, -0.4)] {
            let t = tips(&State::new(0.0, x, y, 0.0, 0.0));
            assert_abs_diff_eq!(dist([0.0, 0.0], t.elbow), ROD_LENGTH, epsilon = 1e-12);
            assert_abs_diff_eq!(dist(t.elbow, t.tip), ROD_LENGTH, epsilon = 1e-12);
        }
    }

    #[test]
    fn horizontal_inner_rod() {
        let t = tips(&State::new(0.0, std::f64::consts::FRAC_PI_2, 0.0, 0.0, 0.0));
        assert_abs_diff_eq!(t.elbow[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.elbow[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.tip[1], -1.0, epsilon = 1e-12);
    }
}
