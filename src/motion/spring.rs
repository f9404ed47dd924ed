// Damped harmonic spring, stepped in closed form so frame rate does not
// change the path.

const CRITICAL_EPSILON: f64 = 1e-6;

// Settled once closer than REST_DELTA and slower than REST_SPEED
pub const REST_DELTA: f64 = 0.5;
pub const REST_SPEED: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    // >= 1.0 means no oscillation
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Largest overshoot past the target, as a fraction of the initial
    /// displacement, for a spring released from rest.
    #[cfg(test)]
    pub fn overshoot_bound(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-std::f64::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }

    // Displacement is measured from the target
    pub fn step(&self, displacement: f64, velocity: f64, dt: f64) -> (f64, f64) {
        if dt <= 0.0 {
            return (displacement, velocity);
        }
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let b = velocity + omega * displacement;
            let decay = (-omega * dt).exp();
            let d = (displacement + b * dt) * decay;
            let v = (velocity - omega * b * dt) * decay;
            (d, v)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = displacement;
            let b = (velocity + zeta * omega * displacement) / omega_d;
            let decay = (-zeta * omega * dt).exp();
            let (sin, cos) = (omega_d * dt).sin_cos();
            let d = decay * (a * cos + b * sin);
            let v = decay
                * ((b * omega_d - a * zeta * omega) * cos - (a * omega_d + b * zeta * omega) * sin);
            (d, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (velocity - r1 * displacement) / (r2 - r1);
            let c1 = displacement - c2;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    /// Seconds until a unit step settles within `tolerance`, capped at ten.
    pub fn settle_time(&self, tolerance: f64) -> f64 {
        const DT: f64 = 1.0 / 240.0;
        const LIMIT: f64 = 10.0;

        let (mut d, mut v): (f64, f64) = (1.0, 0.0);
        let mut t = 0.0;
        while t < LIMIT {
            if d.abs() < tolerance && (v.abs() * DT) < tolerance {
                return t;
            }
            (d, v) = self.step(d, v, DT);
            t += DT;
        }
        LIMIT
    }

    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let duration = self.settle_time(0.001);
        let points: Vec<String> = (0..samples)
            .map(|i| {
                let t = duration * i as f64 / (samples - 1) as f64;
                let (d, _) = self.step(1.0, 0.0, t);
                format!("{:.3}", 1.0 - d)
            })
            .collect();
        format!("linear({})", points.join(", "))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringAxis {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl SpringAxis {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    // Position and velocity carry over, so a mid-flight retarget bends the path
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn advance(&mut self, dt: f64) {
        let (d, v) = self
            .config
            .step(self.position - self.target, self.velocity, dt);
        self.position = self.target + d;
        self.velocity = v;
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}
