// ============================================
// Noise Field - Градиентный шум ландшафта
// ============================================
// Perlin + FBm. Детерминирован для тройки (сид, частота, координата):
// высоты столбцов можно пересчитывать сколько угодно раз.

/// Количество октав FBm
const OCTAVES: u32 = 3;
/// Множитель частоты между октавами
const LACUNARITY: f32 = 2.0;
/// Множитель амплитуды между октавами
const GAIN: f32 = 0.5;

/// Градиенты ячеек (8 направлений)
const GRAD2: [[f32; 2]; 8] = [
    [1.0, 0.0],
    [0.0, 1.0],
    [-1.0, 0.0],
    [0.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, -1.0],
];

/// 2D шумовое поле с фиксированным сидом и частотой
pub struct NoiseField {
    frequency: f32,
    /// Таблица перестановок, продублирована чтобы не брать индексы по модулю
    perm: [u8; 512],
}

impl NoiseField {
    pub fn new(seed: i32, frequency: f32) -> Self {
        // Перемешиваем таблицу перестановок сидом (Fisher-Yates)
        let mut table: [u8; 256] = core::array::from_fn(|i| i as u8);
        let mut state = (seed as i64 as u64) ^ 0x9E37_79B9_7F4A_7C15;

        for i in (1..256usize).rev() {
            let j = (split_mix(&mut state) % (i as u64 + 1)) as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self { frequency, perm }
    }

    /// Значение шума в мировой точке (x, z), диапазон [-1, 1]
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut bounding = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;

        for _ in 0..OCTAVES {
            total += amplitude * self.perlin(x * frequency, z * frequency);
            bounding += amplitude;
            amplitude *= GAIN;
            frequency *= LACUNARITY;
        }

        (total / bounding).clamp(-1.0, 1.0)
    }

    /// Одна октава Perlin шума
    fn perlin(&self, x: f32, z: f32) -> f32 {
        let cell_x = x.floor() as i32;
        let cell_z = z.floor() as i32;

        let fx = x - x.floor();
        let fz = z - z.floor();

        let u = fade(fx);
        let v = fade(fz);

        let n00 = grad(self.hash(cell_x, cell_z), fx, fz);
        let n10 = grad(self.hash(cell_x + 1, cell_z), fx - 1.0, fz);
        let n01 = grad(self.hash(cell_x, cell_z + 1), fx, fz - 1.0);
        let n11 = grad(self.hash(cell_x + 1, cell_z + 1), fx - 1.0, fz - 1.0);

        let nx0 = lerp(n00, n10, u);
        let nx1 = lerp(n01, n11, u);

        // Растягиваем до примерно [-1, 1]
        lerp(nx0, nx1, v) * core::f32::consts::SQRT_2
    }

    #[inline]
    fn hash(&self, x: i32, z: i32) -> u8 {
        let xi = (x & 255) as usize;
        let zi = (z & 255) as usize;
        self.perm[self.perm[xi] as usize + zi]
    }
}

#[inline(always)]
fn split_mix(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut n = *state;
    n = (n ^ (n >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    n = (n ^ (n >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    n ^ (n >> 31)
}

#[inline(always)]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline(always)]
fn grad(hash: u8, x: f32, z: f32) -> f32 {
    let [gx, gz] = GRAD2[(hash & 7) as usize];
    gx * x + gz * z
}
