// Copyright @yucwang 2026

//! Tabulated optical data. Every table is sorted by key and is only ever
//! read through `LookupTable`.

use crate::math::constants::Float;

/// Rayleigh volume scattering coefficient (km^-1) of standard air against
/// wavelength (nm). Bucholtz 1995.
pub const RAYLEIGH_VOLUME_SCATTERING: &[(Float, Float)] = &[
    (200.0, 9.202e-1), (210.0, 7.225e-1), (220.0, 5.781e-1), (230.0, 4.691e-1),
    (240.0, 3.859e-1), (250.0, 3.208e-1), (260.0, 2.690e-1), (270.0, 2.277e-1),
    (280.0, 1.940e-1), (290.0, 1.665e-1), (300.0, 1.437e-1), (310.0, 1.249e-1),
    (320.0, 1.090e-1), (330.0, 9.557e-2), (340.0, 8.425e-2), (350.0, 7.450e-2),
    (360.0, 6.619e-2), (370.0, 5.901e-2), (380.0, 5.275e-2), (390.0, 4.734e-2),
    (400.0, 4.261e-2), (410.0, 3.845e-2), (420.0, 3.479e-2), (430.0, 3.156e-2),
    (440.0, 2.870e-2), (450.0, 2.616e-2), (460.0, 2.389e-2), (470.0, 2.187e-2),
    (480.0, 2.005e-2), (490.0, 1.842e-2), (500.0, 1.696e-2), (510.0, 1.564e-2),
    (520.0, 1.444e-2), (530.0, 1.336e-2), (540.0, 1.238e-2), (550.0, 1.149e-2),
    (560.0, 1.067e-2), (570.0, 9.927e-3), (580.0, 9.247e-3), (590.0, 8.624e-3),
    (600.0, 8.053e-3), (610.0, 7.530e-3), (620.0, 7.049e-3), (630.0, 6.605e-3),
    (640.0, 6.196e-3), (650.0, 5.819e-3), (660.0, 5.470e-3), (670.0, 5.146e-3),
    (680.0, 4.847e-3), (690.0, 4.568e-3), (700.0, 4.310e-3), (710.0, 4.069e-3),
    (720.0, 3.846e-3), (730.0, 3.637e-3), (740.0, 3.442e-3), (750.0, 3.261e-3),
    (760.0, 3.090e-3), (770.0, 2.931e-3), (780.0, 2.781e-3), (790.0, 2.641e-3),
    (800.0, 2.510e-3), (900.0, 1.561e-3), (1000.0, 1.022e-3), (1100.0, 6.964e-4),
    (1200.0, 4.909e-4), (1300.0, 3.560e-4), (1400.0, 2.644e-4), (1500.0, 2.005e-4),
    (1600.0, 1.548e-4), (1700.0, 1.214e-4), (1800.0, 9.656e-5), (1900.0, 7.775e-5),
    (2000.0, 6.331e-5), (2200.0, 4.322e-5), (2400.0, 3.050e-5), (2600.0, 2.214e-5),
    (2800.0, 1.646e-5), (3000.0, 1.249e-5), (3500.0, 6.737e-6), (4000.0, 3.948e-6),
];

/// US Standard Atmosphere 1976 temperature (K) against height (km).
pub const STANDARD_TEMPERATURE: &[(Float, Float)] = &[
    (0.0, 288.15), (1.0, 281.65), (2.0, 275.15), (3.0, 268.65),
    (4.0, 262.15), (5.0, 255.65), (6.0, 249.15), (7.0, 242.65),
    (8.0, 236.15), (9.0, 229.65), (10.0, 223.15), (11.0, 216.65),
    (12.0, 216.65), (13.0, 216.65), (14.0, 216.65), (15.0, 216.65),
    (16.0, 216.65), (17.0, 216.65), (18.0, 216.65), (19.0, 216.65),
    (20.0, 216.65), (21.0, 217.65), (22.0, 218.65), (23.0, 219.65),
    (24.0, 220.65), (25.0, 221.65), (26.0, 222.65), (27.0, 223.65),
    (28.0, 224.65), (29.0, 225.65), (30.0, 226.65), (31.0, 227.65),
    (32.0, 228.65), (33.0, 231.45), (34.0, 234.25), (35.0, 237.05),
    (36.0, 239.85), (37.0, 242.65), (38.0, 245.45), (39.0, 248.25),
    (40.0, 251.05), (41.0, 253.85), (42.0, 256.65), (43.0, 259.45),
    (44.0, 262.25), (45.0, 265.05), (46.0, 267.85), (47.0, 270.65),
    (48.0, 270.65), (49.0, 270.65), (50.0, 270.65), (51.0, 270.65),
    (52.0, 267.85), (53.0, 265.05), (54.0, 262.25), (55.0, 259.45),
    (56.0, 256.65), (57.0, 253.85), (58.0, 251.05), (59.0, 248.25),
    (60.0, 245.45), (61.0, 242.65), (62.0, 239.85), (63.0, 237.05),
    (64.0, 234.25), (65.0, 231.45), (66.0, 228.65), (67.0, 225.85),
    (68.0, 223.05), (69.0, 220.25), (70.0, 217.45), (71.0, 214.65),
    (72.0, 212.65), (73.0, 210.65), (74.0, 208.65), (75.0, 206.65),
    (76.0, 204.65), (77.0, 202.65), (78.0, 200.65), (79.0, 198.65),
    (80.0, 196.65), (81.0, 194.65), (82.0, 192.65), (83.0, 190.65),
    (84.0, 188.65), (85.0, 186.946), (86.0, 186.946),
];

/// US Standard Atmosphere 1976 pressure (Pa) against height (km).
pub const STANDARD_PRESSURE: &[(Float, Float)] = &[
    (0.0, 101325.0), (1.0, 89874.6), (2.0, 79495.2), (3.0, 70108.5),
    (4.0, 61640.2), (5.0, 54019.9), (6.0, 47181.0), (7.0, 41060.7),
    (8.0, 35599.8), (9.0, 30742.5), (10.0, 26436.3), (11.0, 22632.1),
    (12.0, 19330.4), (13.0, 16510.4), (14.0, 14101.8), (15.0, 12044.6),
    (16.0, 10287.5), (17.0, 8786.68), (18.0, 7504.84), (19.0, 6410.01),
    (20.0, 5474.89), (21.0, 4677.89), (22.0, 3999.79), (23.0, 3422.43),
    (24.0, 2930.49), (25.0, 2511.02), (26.0, 2153.09), (27.0, 1847.46),
    (28.0, 1586.29), (29.0, 1362.96), (30.0, 1171.87), (31.0, 1008.23),
    (32.0, 868.019), (33.0, 748.228), (34.0, 646.122), (35.0, 558.924),
    (36.0, 484.317), (37.0, 420.367), (38.0, 365.455), (39.0, 318.220),
    (40.0, 277.522), (41.0, 242.395), (42.0, 212.030), (43.0, 185.738),
    (44.0, 162.937), (45.0, 143.135), (46.0, 125.910), (47.0, 110.906),
    (48.0, 97.7545), (49.0, 86.1623), (50.0, 75.9448), (51.0, 66.9389),
    (52.0, 58.9622), (53.0, 51.8668), (54.0, 45.5632), (55.0, 39.9700),
    (56.0, 35.0137), (57.0, 30.6274), (58.0, 26.7509), (59.0, 23.3296),
    (60.0, 20.3143), (61.0, 17.6606), (62.0, 15.3287), (63.0, 13.2826),
    (64.0, 11.4900), (65.0, 9.92203), (66.0, 8.55275), (67.0, 7.35895),
    (68.0, 6.31992), (69.0, 5.41717), (70.0, 4.63422), (71.0, 3.95642),
    (72.0, 3.37176), (73.0, 2.86917), (74.0, 2.43773), (75.0, 2.06792),
    (76.0, 1.75140), (77.0, 1.48092), (78.0, 1.25012), (79.0, 1.05351),
    (80.0, 0.88628), (81.0, 0.74428), (82.0, 0.623905), (83.0, 0.522037),
    (84.0, 0.435981), (85.0, 0.36342), (86.0, 0.302723),
];

/// Ozone absorption cross-section (cm^2) at 295K against wavelength (nm).
/// Gorshelev 2014.
pub const OZONE_CROSS_SECTION: &[(Float, Float)] = &[
    (244.0, 946.0e-20), (248.0, 1051.0e-20), (253.0, 1120.0e-20),
    (257.0, 1107.0e-20), (289.0, 151.0e-20), (296.0, 61.1e-20),
    (302.0, 29.6e-20), (365.0, 4.9e-23), (405.0, 1.46e-23),
    (455.0, 20.6e-23), (543.0, 3.08e-21), (576.0, 4.70e-21),
    (594.0, 4.63e-21), (604.0, 5.10e-21), (611.0, 4.54e-21),
    (632.0, 3.36e-21), (748.0, 4.38e-22), (755.0, 3.22e-22),
    (760.0, 2.77e-22), (765.0, 2.53e-22), (770.0, 2.49e-22),
    (779.0, 3.15e-22), (802.0, 1.45e-22), (817.0, 2.20e-22),
    (853.0, 1.46e-22), (877.0, 0.377e-22), (889.0, 0.510e-22),
    (898.0, 0.638e-22), (933.0, 0.162e-22), (944.0, 0.424e-22),
    (991.0, 0.407e-22), (1046.0, 0.0773e-22),
];

/// Depolarization term of the molecular phase function against wavelength
/// (nm). Bucholtz 1995.
pub const CHANDRASEKHAR_GAMMA: &[(Float, Float)] = &[
    (200.0, 0.02326), (205.0, 0.02241), (210.0, 0.02100), (215.0, 0.02043),
    (220.0, 0.01986), (225.0, 0.01930), (240.0, 0.01872), (260.0, 0.01758),
    (270.0, 0.01729), (280.0, 0.01672), (290.0, 0.01643), (300.0, 0.01614),
    (310.0, 0.01614), (320.0, 0.01586), (330.0, 0.01557), (340.0, 0.01557),
    (350.0, 0.01528), (360.0, 0.01528), (370.0, 0.01528), (380.0, 0.01499),
    (390.0, 0.01499), (400.0, 0.01499), (450.0, 0.01471), (500.0, 0.01442),
    (550.0, 0.01442), (600.0, 0.01413), (650.0, 0.01413), (700.0, 0.01413),
    (750.0, 0.01413), (800.0, 0.01384), (850.0, 0.01384), (900.0, 0.01384),
    (950.0, 0.01384), (1000.0, 0.01384),
];

/// Monthly mean total ozone column (Dobson units), January first.
/// Dutsch 1973, Arosa 47N.
pub const OZONE_MONTHLY_MEAN_DOBSON: [Float; 12] = [
    347.0, 370.0, 381.0, 384.0, 372.0, 352.0,
    333.0, 317.0, 298.0, 285.0, 290.0, 315.0,
];

/// Extraterrestrial solar spectral irradiance (W m^-2 nm^-1) against
/// wavelength (nm), resampled from ASTM E-490.
pub const SOLAR_IRRADIANCE: &[(Float, Float)] = &[
    (250.0, 0.0704), (275.0, 0.2310), (300.0, 0.5140), (325.0, 0.8010),
    (350.0, 1.0650), (375.0, 1.1420), (400.0, 1.6300), (425.0, 1.7100),
    (450.0, 2.0300), (475.0, 2.0300), (500.0, 1.9200), (525.0, 1.8600),
    (550.0, 1.8700), (575.0, 1.8000), (600.0, 1.7600), (625.0, 1.6600),
    (650.0, 1.5800), (675.0, 1.5100), (700.0, 1.4300), (725.0, 1.3800),
    (750.0, 1.2800), (775.0, 1.2100), (800.0, 1.1400), (850.0, 0.9800),
    (900.0, 0.9000), (950.0, 0.8200), (1000.0, 0.7400), (1250.0, 0.4700),
    (1500.0, 0.2900), (2000.0, 0.1200),
];

// Aerosol cross-sections, in km^-1 per particle per m^3, so that
// cross-section * number density yields a coefficient in km^-1.

pub const BACKGROUND_SCATTERING: &[(Float, Float)] = &[
    (250.0, 9.8685e-22), (300.0, 7.9293e-22), (350.0, 6.5902e-22),
    (400.0, 5.6144e-22), (450.0, 4.8744e-22), (500.0, 4.2955e-22),
    (550.0, 3.8313e-22), (600.0, 3.4514e-22), (650.0, 3.1353e-22),
    (700.0, 2.8685e-22), (750.0, 2.6406e-22), (800.0, 2.4438e-22),
    (900.0, 2.1217e-22), (1000.0, 1.8697e-22), (1250.0, 1.4305e-22),
    (1500.0, 1.1494e-22), (2000.0, 8.1385e-23),
];

pub const BACKGROUND_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 9.9682e-24), (300.0, 8.0093e-24), (350.0, 6.6567e-24),
    (400.0, 5.6711e-24), (450.0, 4.9237e-24), (500.0, 4.3389e-24),
    (550.0, 3.8700e-24), (600.0, 3.4863e-24), (650.0, 3.1670e-24),
    (700.0, 2.8975e-24), (750.0, 2.6673e-24), (800.0, 2.4685e-24),
    (900.0, 2.1431e-24), (1000.0, 1.8886e-24), (1250.0, 1.4449e-24),
    (1500.0, 1.1610e-24), (2000.0, 8.2207e-25),
];

pub const DESERT_DUST_SCATTERING: &[(Float, Float)] = &[
    (250.0, 1.1167e-19), (300.0, 1.0767e-19), (350.0, 1.0440e-19),
    (400.0, 1.0165e-19), (450.0, 9.9287e-20), (500.0, 9.7217e-20),
    (550.0, 9.5381e-20), (600.0, 9.3736e-20), (650.0, 9.2247e-20),
    (700.0, 9.0890e-20), (750.0, 8.9644e-20), (800.0, 8.8495e-20),
    (900.0, 8.6434e-20), (1000.0, 8.4632e-20), (1250.0, 8.0938e-20),
    (1500.0, 7.8040e-20), (2000.0, 7.3676e-20),
];

pub const DESERT_DUST_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 1.3802e-20), (300.0, 1.3308e-20), (350.0, 1.2904e-20),
    (400.0, 1.2564e-20), (450.0, 1.2271e-20), (500.0, 1.2016e-20),
    (550.0, 1.1789e-20), (600.0, 1.1585e-20), (650.0, 1.1401e-20),
    (700.0, 1.1234e-20), (750.0, 1.1080e-20), (800.0, 1.0938e-20),
    (900.0, 1.0683e-20), (1000.0, 1.0460e-20), (1250.0, 1.0004e-20),
    (1500.0, 9.6454e-21), (2000.0, 9.1061e-21),
];

pub const MARITIME_CLEAN_SCATTERING: &[(Float, Float)] = &[
    (250.0, 4.7956e-19), (300.0, 4.7090e-19), (350.0, 4.6370e-19),
    (400.0, 4.5755e-19), (450.0, 4.5219e-19), (500.0, 4.4745e-19),
    (550.0, 4.4321e-19), (600.0, 4.3937e-19), (650.0, 4.3586e-19),
    (700.0, 4.3264e-19), (750.0, 4.2967e-19), (800.0, 4.2691e-19),
    (900.0, 4.2191e-19), (1000.0, 4.1749e-19), (1250.0, 4.0827e-19),
    (1500.0, 4.0090e-19), (2000.0, 3.8953e-19),
];

pub const MARITIME_CLEAN_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 9.6105e-22), (300.0, 9.4369e-22), (350.0, 9.2925e-22),
    (400.0, 9.1693e-22), (450.0, 9.0619e-22), (500.0, 8.9669e-22),
    (550.0, 8.8819e-22), (600.0, 8.8049e-22), (650.0, 8.7347e-22),
    (700.0, 8.6702e-22), (750.0, 8.6106e-22), (800.0, 8.5552e-22),
    (900.0, 8.4551e-22), (1000.0, 8.3664e-22), (1250.0, 8.1818e-22),
    (1500.0, 8.0340e-22), (2000.0, 7.8062e-22),
];

pub const MARITIME_MINERAL_SCATTERING: &[(Float, Float)] = &[
    (250.0, 7.2763e-19), (300.0, 6.8890e-19), (350.0, 6.5777e-19),
    (400.0, 6.3194e-19), (450.0, 6.1000e-19), (500.0, 5.9102e-19),
    (550.0, 5.7436e-19), (600.0, 5.5956e-19), (650.0, 5.4629e-19),
    (700.0, 5.3427e-19), (750.0, 5.2333e-19), (800.0, 5.1329e-19),
    (900.0, 4.9547e-19), (1000.0, 4.8006e-19), (1250.0, 4.4897e-19),
    (1500.0, 4.2508e-19), (2000.0, 3.8993e-19),
];

pub const MARITIME_MINERAL_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 2.2504e-20), (300.0, 2.1306e-20), (350.0, 2.0343e-20),
    (400.0, 1.9545e-20), (450.0, 1.8866e-20), (500.0, 1.8279e-20),
    (550.0, 1.7764e-20), (600.0, 1.7306e-20), (650.0, 1.6895e-20),
    (700.0, 1.6524e-20), (750.0, 1.6185e-20), (800.0, 1.5875e-20),
    (900.0, 1.5324e-20), (1000.0, 1.4847e-20), (1250.0, 1.3886e-20),
    (1500.0, 1.3147e-20), (2000.0, 1.2060e-20),
];

pub const POLAR_ANTARCTIC_SCATTERING: &[(Float, Float)] = &[
    (250.0, 1.9665e-19), (300.0, 1.6996e-19), (350.0, 1.5024e-19),
    (400.0, 1.3502e-19), (450.0, 1.2288e-19), (500.0, 1.1295e-19),
    (550.0, 1.0466e-19), (600.0, 9.7618e-20), (650.0, 9.1563e-20),
    (700.0, 8.6293e-20), (750.0, 8.1659e-20), (800.0, 7.7550e-20),
    (900.0, 7.0576e-20), (1000.0, 6.4871e-20), (1250.0, 5.4266e-20),
    (1500.0, 4.6901e-20), (2000.0, 3.7259e-20),
];

pub const POLAR_ANTARCTIC_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 1.9685e-22), (300.0, 1.7013e-22), (350.0, 1.5039e-22),
    (400.0, 1.3516e-22), (450.0, 1.2300e-22), (500.0, 1.1306e-22),
    (550.0, 1.0476e-22), (600.0, 9.7716e-23), (650.0, 9.1655e-23),
    (700.0, 8.6379e-23), (750.0, 8.1741e-23), (800.0, 7.7627e-23),
    (900.0, 7.0647e-23), (1000.0, 6.4936e-23), (1250.0, 5.4320e-23),
    (1500.0, 4.6948e-23), (2000.0, 3.7296e-23),
];

pub const POLAR_ARCTIC_SCATTERING: &[(Float, Float)] = &[
    (250.0, 1.5166e-19), (300.0, 1.2870e-19), (350.0, 1.1203e-19),
    (400.0, 9.9346e-20), (450.0, 8.9354e-20), (500.0, 8.1270e-20),
    (550.0, 7.4589e-20), (600.0, 6.8971e-20), (650.0, 6.4177e-20),
    (700.0, 6.0036e-20), (750.0, 5.6422e-20), (800.0, 5.3238e-20),
    (900.0, 4.7883e-20), (1000.0, 4.3552e-20), (1250.0, 3.5627e-20),
    (1500.0, 3.0236e-20), (2000.0, 2.3339e-20),
];

pub const POLAR_ARCTIC_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 1.8744e-20), (300.0, 1.5907e-20), (350.0, 1.3847e-20),
    (400.0, 1.2279e-20), (450.0, 1.1044e-20), (500.0, 1.0045e-20),
    (550.0, 9.2189e-21), (600.0, 8.5245e-21), (650.0, 7.9320e-21),
    (700.0, 7.4202e-21), (750.0, 6.9735e-21), (800.0, 6.5800e-21),
    (900.0, 5.9182e-21), (1000.0, 5.3828e-21), (1250.0, 4.4034e-21),
    (1500.0, 3.7370e-21), (2000.0, 2.8846e-21),
];

pub const REMOTE_CONTINENTAL_SCATTERING: &[(Float, Float)] = &[
    (250.0, 1.2462e-20), (300.0, 9.6547e-21), (350.0, 7.7806e-21),
    (400.0, 6.4539e-21), (450.0, 5.4728e-21), (500.0, 4.7223e-21),
    (550.0, 4.1324e-21), (600.0, 3.6585e-21), (650.0, 3.2706e-21),
    (700.0, 2.9483e-21), (750.0, 2.6768e-21), (800.0, 2.4456e-21),
    (900.0, 2.0738e-21), (1000.0, 1.7894e-21), (1250.0, 1.3093e-21),
    (1500.0, 1.0143e-21), (2000.0, 6.7806e-22),
];

pub const REMOTE_CONTINENTAL_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 3.8543e-22), (300.0, 2.9860e-22), (350.0, 2.4064e-22),
    (400.0, 1.9961e-22), (450.0, 1.6926e-22), (500.0, 1.4605e-22),
    (550.0, 1.2781e-22), (600.0, 1.1315e-22), (650.0, 1.0115e-22),
    (700.0, 9.1185e-23), (750.0, 8.2789e-23), (800.0, 7.5637e-23),
    (900.0, 6.4139e-23), (1000.0, 5.5343e-23), (1250.0, 4.0493e-23),
    (1500.0, 3.1371e-23), (2000.0, 2.0971e-23),
];

pub const RURAL_SCATTERING: &[(Float, Float)] = &[
    (250.0, 1.9433e-20), (300.0, 1.5902e-20), (350.0, 1.3422e-20),
    (400.0, 1.1588e-20), (450.0, 1.0180e-20), (500.0, 9.0660e-21),
    (550.0, 8.1636e-21), (600.0, 7.4185e-21), (650.0, 6.7932e-21),
    (700.0, 6.2614e-21), (750.0, 5.8038e-21), (800.0, 5.4061e-21),
    (900.0, 4.7491e-21), (1000.0, 4.2294e-21), (1250.0, 3.3089e-21),
    (1500.0, 2.7076e-21), (2000.0, 1.9731e-21),
];

pub const RURAL_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 1.4627e-21), (300.0, 1.1969e-21), (350.0, 1.0102e-21),
    (400.0, 8.7223e-22), (450.0, 7.6624e-22), (500.0, 6.8239e-22),
    (550.0, 6.1447e-22), (600.0, 5.5838e-22), (650.0, 5.1132e-22),
    (700.0, 4.7129e-22), (750.0, 4.3685e-22), (800.0, 4.0691e-22),
    (900.0, 3.5746e-22), (1000.0, 3.1834e-22), (1250.0, 2.4906e-22),
    (1500.0, 2.0380e-22), (2000.0, 1.4851e-22),
];

pub const URBAN_SCATTERING: &[(Float, Float)] = &[
    (250.0, 4.9938e-21), (300.0, 4.0863e-21), (350.0, 3.4490e-21),
    (400.0, 2.9778e-21), (450.0, 2.6159e-21), (500.0, 2.3297e-21),
    (550.0, 2.0978e-21), (600.0, 1.9063e-21), (650.0, 1.7457e-21),
    (700.0, 1.6090e-21), (750.0, 1.4914e-21), (800.0, 1.3892e-21),
    (900.0, 1.2204e-21), (1000.0, 1.0868e-21), (1250.0, 8.5028e-22),
    (1500.0, 6.9577e-22), (2000.0, 5.0703e-22),
];

pub const URBAN_ABSORPTION: &[(Float, Float)] = &[
    (250.0, 1.0962e-21), (300.0, 8.9699e-22), (350.0, 7.5709e-22),
    (400.0, 6.5367e-22), (450.0, 5.7423e-22), (500.0, 5.1139e-22),
    (550.0, 4.6049e-22), (600.0, 4.1846e-22), (650.0, 3.8319e-22),
    (700.0, 3.5319e-22), (750.0, 3.2738e-22), (800.0, 3.0495e-22),
    (900.0, 2.6789e-22), (1000.0, 2.3857e-22), (1250.0, 1.8665e-22),
    (1500.0, 1.5273e-22), (2000.0, 1.1130e-22),
];
