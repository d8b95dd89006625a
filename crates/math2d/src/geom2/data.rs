//! Reference data set: 28 line segments (pairs describing the same line),
//! 8 probe points, and expected results derived with exact arithmetic.

/// `(x1, y1, x2, y2)`.
pub(super) const SEGMENTS: [(f64, f64, f64, f64); 28] = [
    // through the origin
    (0.0, 0.0, 1.0, 0.0),
    (-1000000.0, 0.0, 1000000.0, 0.0),
    (0.0, 0.0, 0.0, 1.0),
    (0.0, -1000000.0, 0.0, 1000000.0),
    (0.0, 0.0, 1000000.0, -1.0),
    (-1000000.0, 1.0, 1000000.0, -1.0),
    (0.0, 0.0, 5.0, -1.0),
    (-5000000.0, 1000000.0, 5000000.0, -1000000.0),
    (0.0, 0.0, 4.0, -3.0),
    (-4000000.0, 3000000.0, 4000000.0, -3000000.0),
    (0.0, 0.0, -1.0, 1.0),
    (1000000.0, -1000000.0, -1000000.0, 1000000.0),
    // axis-parallel
    (0.0, 1.0, 1.0, 1.0),
    (-1000000.0, 1.0, 1000000.0, 1.0),
    (0.0, -1.0, 1.0, -1.0),
    (-1000000.0, -1.0, 1000000.0, -1.0),
    (1.0, 0.0, 1.0, 1.0),
    (1.0, -1000000.0, 1.0, 1000000.0),
    (-1.0, 0.0, -1.0, 1.0),
    (-1.0, -1000000.0, -1.0, 1000000.0),
    // off the origin, second quadrant
    (-1.0, 1.0, 999999.0, 2.0),
    (-1000001.0, 0.0, 999999.0, 2.0),
    (-1.0, 1.0, 4.0, 2.0),
    (-5000001.0, -999999.0, 4999999.0, 1000001.0),
    (-1.0, 1.0, 3.0, 4.0),
    (-4000001.0, -2999999.0, 3999999.0, 3000001.0),
    (-1.0, 1.0, 0.0, 2.0),
    (-1000001.0, -999999.0, 999999.0, 1000001.0),
];

pub(super) const POINTS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
    (100.0, 0.0),
    (100.0, -1.0),
    (100.0, -2.0),
    (100.0, -3.0),
];

/// `(A, B, C)` per segment.
pub(super) const COEFFICIENTS: [(f64, f64, f64); 28] = [
    (0.0, -1.0, 0.0),
    (0.0, -2000000.0, 0.0),
    (1.0, 0.0, 0.0),
    (2000000.0, 0.0, 0.0),
    (-1.0, -1000000.0, 0.0),
    (-2.0, -2000000.0, 0.0),
    (-1.0, -5.0, 0.0),
    (-2000000.0, -10000000.0, 0.0),
    (-3.0, -4.0, 0.0),
    (-6000000.0, -8000000.0, 0.0),
    (1.0, 1.0, 0.0),
    (2000000.0, 2000000.0, 0.0),
    (0.0, -1.0, 1.0),
    (0.0, -2000000.0, 2000000.0),
    (0.0, -1.0, -1.0),
    (0.0, -2000000.0, -2000000.0),
    (1.0, 0.0, -1.0),
    (2000000.0, 0.0, -2000000.0),
    (1.0, 0.0, 1.0),
    (2000000.0, 0.0, 2000000.0),
    (1.0, -1000000.0, 1000001.0),
    (2.0, -2000000.0, 2000002.0),
    (1.0, -5.0, 6.0),
    (2000000.0, -10000000.0, 12000000.0),
    (3.0, -4.0, 7.0),
    (6000000.0, -8000000.0, 14000000.0),
    (1.0, -1.0, 2.0),
    (2000000.0, -2000000.0, 4000000.0),
];

/// `LOCATIONS[point][segment]`.
pub(super) const LOCATIONS: [[i32; 28]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, -1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, -1, -1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, 1, 1, 0, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [-1, -1, 1, 1, -1, -1, -1, -1, -1, -1, 1, 1, -1, -1, 0, 0, 1, 1, 0, 0, -1, -1, -1, -1, -1, -1, -1, -1],
    [0, 0, -1, -1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 1, 1, 1, 1, -1, -1, -1, -1, 0, 0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

/// `DISTANCES[point][segment]`.
pub(super) const DISTANCES: [[f64; 28]; 8] = [
    [
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 1.0, 1.0,
        1.0000009999995, 1.0000009999995, 1.1766968108291043, 1.1766968108291043,
        1.4, 1.4, 1.4142135623730951, 1.4142135623730951,
    ],
    [
        0.0, 0.0, 1.0, 1.0,
        9.999999999995e-07, 9.999999999995e-07, 0.19611613513818404, 0.19611613513818404,
        0.6, 0.6, 0.7071067811865476, 0.7071067811865476,
        1.0, 1.0, 1.0, 1.0,
        0.0, 0.0, 2.0, 2.0,
        1.0000019999995, 1.0000019999995, 1.3728129459672882, 1.3728129459672882,
        2.0, 2.0, 2.1213203435596424, 2.1213203435596424,
    ],
    [
        1.0, 1.0, 1.0, 1.0,
        0.9999989999995, 0.9999989999995, 0.7844645405527362, 0.7844645405527362,
        0.2, 0.2, 0.0, 0.0,
        0.0, 0.0, 2.0, 2.0,
        2.0, 2.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0,
    ],
    [
        1.0, 1.0, 1.0, 1.0,
        1.0000009999995, 1.0000009999995, 1.1766968108291043, 1.1766968108291043,
        1.4, 1.4, 1.4142135623730951, 1.4142135623730951,
        2.0, 2.0, 0.0, 0.0,
        2.0, 2.0, 0.0, 0.0,
        1.999999999999, 1.999999999999, 1.9611613513818402, 1.9611613513818402,
        1.6, 1.6, 1.4142135623730951, 1.4142135623730951,
    ],
    [
        0.0, 0.0, 100.0, 100.0,
        9.999999999995e-05, 9.999999999995e-05, 19.611613513818405, 19.611613513818405,
        60.0, 60.0, 70.71067811865476, 70.71067811865476,
        1.0, 1.0, 1.0, 1.0,
        99.0, 99.0, 101.0, 101.0,
        1.0001009999994999, 1.0001009999994999, 20.788310324647508, 20.788310324647508,
        61.4, 61.4, 72.12489168102785, 72.12489168102785,
    ],
    [
        1.0, 1.0, 100.0, 100.0,
        0.9998999999995001, 0.9998999999995001, 18.63103283812748, 18.63103283812748,
        59.2, 59.2, 70.0035713374682, 70.0035713374682,
        2.0, 2.0, 0.0, 0.0,
        99.0, 99.0, 101.0, 101.0,
        2.000100999999, 2.000100999999, 21.768891000338428, 21.768891000338428,
        62.2, 62.2, 72.8319984622144, 72.8319984622144,
    ],
    [
        2.0, 2.0, 100.0, 100.0,
        1.9998999999990001, 1.9998999999990001, 17.65045216243656, 17.65045216243656,
        58.4, 58.4, 69.29646455628166, 69.29646455628166,
        3.0, 3.0, 1.0, 1.0,
        99.0, 99.0, 101.0, 101.0,
        3.0001009999984998, 3.0001009999984998, 22.749471676029348, 22.749471676029348,
        63.0, 63.0, 73.53910524340094, 73.53910524340094,
    ],
    [
        3.0, 3.0, 100.0, 100.0,
        2.9998999999985, 2.9998999999985, 16.66987148674564, 16.66987148674564,
        57.6, 57.6, 68.58935777509511, 68.58935777509511,
        4.0, 4.0, 2.0, 2.0,
        99.0, 99.0, 101.0, 101.0,
        4.000100999998, 4.000100999998, 23.730052351720268, 23.730052351720268,
        63.8, 63.8, 74.24621202458749, 74.24621202458749,
    ],
];

/// Exact parallelism. Row `i`, column `j`: `'1'` if segments `i` and `j` satisfy it.
pub(super) const PARALLEL: [&str; 28] = [
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0000110000000000000000000000",
    "0000110000000000000000000000",
    "0000001100000000000000000000",
    "0000001100000000000000000000",
    "0000000011000000000000000000",
    "0000000011000000000000000000",
    "0000000000110000000000000000",
    "0000000000110000000000000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0000000000000000000011000000",
    "0000000000000000000011000000",
    "0000000000000000000000110000",
    "0000000000000000000000110000",
    "0000000000000000000000001100",
    "0000000000000000000000001100",
    "0000000000000000000000000011",
    "0000000000000000000000000011",
];

/// Exact coincidence. Row `i`, column `j`: `'1'` if segments `i` and `j` satisfy it.
pub(super) const MATCHING: [&str; 28] = [
    "1100000000000000000000000000",
    "1100000000000000000000000000",
    "0011000000000000000000000000",
    "0011000000000000000000000000",
    "0000110000000000000000000000",
    "0000110000000000000000000000",
    "0000001100000000000000000000",
    "0000001100000000000000000000",
    "0000000011000000000000000000",
    "0000000011000000000000000000",
    "0000000000110000000000000000",
    "0000000000110000000000000000",
    "0000000000001100000000000000",
    "0000000000001100000000000000",
    "0000000000000011000000000000",
    "0000000000000011000000000000",
    "0000000000000000110000000000",
    "0000000000000000110000000000",
    "0000000000000000001100000000",
    "0000000000000000001100000000",
    "0000000000000000000011000000",
    "0000000000000000000011000000",
    "0000000000000000000000110000",
    "0000000000000000000000110000",
    "0000000000000000000000001100",
    "0000000000000000000000001100",
    "0000000000000000000000000011",
    "0000000000000000000000000011",
];

/// Exact perpendicularity. Row `i`, column `j`: `'1'` if segments `i` and `j` satisfy it.
pub(super) const PERPENDICULAR: [&str; 28] = [
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000011",
    "0000000000000000000000000011",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "0011000000000000111100000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "1100000000001111000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000000000000000000000",
    "0000000000110000000000000000",
    "0000000000110000000000000000",
];
