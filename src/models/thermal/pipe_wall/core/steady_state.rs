//! Closed-form steady state of the discretized shell.
//!
//! A field is stationary when every entry of the flux array carries the
//! same power `Q`. The films give `T[0] = t1 - Q/G_in` and
//! `T[n-1] = t2 + Q/G_out`. Each interface conductance `G_i` adds `Q/G_i`
//! walking outward, since [`Behavior::interface_power`] is proportional to
//! `T[i+1] - T[i]`. Closing the walk fixes `Q`.

use std::f64::consts::TAU;

use super::Behavior;

impl Behavior {
    /// Returns the cell temperatures (K) that the explicit scheme leaves
    /// unchanged, if they are unique.
    ///
    /// With one face insulated the shell settles at the other ambient.
    /// Returns `None` when both faces are insulated, when a zero
    /// conductivity decouples the cells, or when the film and interface
    /// resistances cancel.
    #[must_use]
    pub fn steady_state(&self) -> Option<Vec<f64>> {
        let interfaces: Vec<f64> = (0..self.cells - 1)
            .map(|i| self.interface_circumference(i) * self.conductivity / self.dr)
            .collect();
        if interfaces.iter().any(|&g| g <= 0.0) {
            return None;
        }

        let g_in = self.alpha1 * TAU * self.rad1;
        let g_out = self.alpha2 * TAU * self.rad2;

        match (g_in > 0.0, g_out > 0.0) {
            (false, false) => return None,
            (false, true) => return Some(vec![self.t2; self.cells]),
            (true, false) => return Some(vec![self.t1; self.cells]),
            (true, true) => {}
        }

        let resistance =
            1.0 / g_in + 1.0 / g_out - interfaces.iter().map(|g| 1.0 / g).sum::<f64>();
        let q = (self.t1 - self.t2) / resistance;
        if !q.is_finite() {
            return None;
        }

        let mut field = Vec::with_capacity(self.cells);
        let mut t = self.t1 - q / g_in;
        field.push(t);
        for g in interfaces {
            t += q / g;
            field.push(t);
        }
        Some(field)
    }
}
