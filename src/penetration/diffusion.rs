use std::f64::consts::PI;

/// Cunningham 미끄럼 보정계수.
///
/// Cc = 1 + (λ/dp)·(2.514 + 0.8·exp(−0.55·dp/λ))
pub fn cunningham_correction(particle_diameter_m: f64, mean_free_path_m: f64) -> f64 {
    let kn = mean_free_path_m / particle_diameter_m;
    1.0 + kn * (2.514 + 0.8 * (-0.55 * particle_diameter_m / mean_free_path_m).exp())
}

/// Stokes-Einstein 입자 확산계수 [m2/s].
///
/// D = k·T·Cc / (3π·μ·dp)
pub fn diffusion_coefficient(
    temperature_k: f64,
    particle_diameter_m: f64,
    cunningham: f64,
    viscosity_pa_s: f64,
    boltzmann_j_per_k: f64,
) -> f64 {
    boltzmann_j_per_k * temperature_k * cunningham
        / (3.0 * PI * viscosity_pa_s * particle_diameter_m)
}
