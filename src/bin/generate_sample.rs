//! Writes a few raw settlement CSVs with the formatting quirks of the real
//! exports (comma-grouped quoted amounts, trailing padding on text columns)
//! into `csv-convertido/`, for exercising the cleaning stage by hand.

use std::path::Path;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform pick from a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Uniform float in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// `1234567.5` → `1,234,567.50`, the display format the exports use.
fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let frac = cents % 100;
    let digits = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{grouped}.{frac:02}", if negative { "-" } else { "" })
}

/// Wrap an amount the way the exports do: sometimes bare, sometimes quoted,
/// sometimes quoted and padded.
fn messy_amount(amount: f64, rng: &mut SimpleRng) -> String {
    let formatted = group_thousands(amount);
    match rng.next_u64() % 3 {
        0 => formatted,
        1 => format!("\"{formatted}\""),
        _ => format!(" \"{formatted}\" "),
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let header = [
        "NIVEL",
        "DESCAGENTE",
        "NRO_DOCUMENTO",
        "PLANTA",
        "ORGANISMO",
        "FUNCION",
        "PERIODO_IMPUTADO",
        "PERIODO_LIQUIDADO",
        "HAB_C_AP",
        "TOT_HAB",
        "DESCUENTOS",
        "LIQUIDO",
        "AP100_090_54",
        "ESTADO_LIQUIDACION",
    ];

    let niveles = ["A", "B", "C", "D"];
    let agentes = [
        "GOMEZ, MARIA ",
        "PEREZ, JUAN CARLOS  ",
        "RODRIGUEZ, ANA",
        "FERNANDEZ, LUIS ",
        "LOPEZ, CLARA   ",
    ];
    let plantas = [
        "Residentes",
        "Residentes Nacionales",
        "Planta Permanente ",
        "Contratados  ",
    ];
    let organismos = ["HOSPITAL CENTRAL ", "MINISTERIO DE SALUD", "ZONA SANITARIA II  "];
    let funciones = ["ENFERMERIA ", "ADMINISTRACION", "MEDICO DE GUARDIA  "];
    let estados = ["DEFINITIVA ", "PROVISORIA"];

    let periods = ["2024-01", "2024-02", "2024-03"];
    let output_dir = Path::new("csv-convertido");
    std::fs::create_dir_all(output_dir).expect("Failed to create output directory");

    let mut total_rows = 0usize;
    for period in &periods {
        let name = format!("liquidaciones_{}.csv", period.replace('-', "_"));
        let path = output_dir.join(&name);
        let mut writer = csv::Writer::from_path(&path).expect("Failed to create output file");
        writer.write_record(header).expect("Failed to write header");

        for _ in 0..40 {
            let gross = rng.range(350_000.0, 2_600_000.0);
            let deductions = gross * rng.range(0.17, 0.23);
            let net = gross - deductions;
            // Most rows settle in their own period; a few are late
            // corrections imputed to an earlier month.
            let imputado = if rng.next_f64() < 0.85 {
                format!("{period} ")
            } else {
                "2023-12".to_string()
            };
            let contribution = if rng.next_f64() < 0.25 {
                rng.range(10_000.0, 90_000.0)
            } else {
                0.0
            };

            let record = [
                rng.choose(&niveles).to_string(),
                rng.choose(&agentes).to_string(),
                format!("{}", 20_000_000 + (rng.next_u64() % 25_000_000)),
                rng.choose(&plantas).to_string(),
                rng.choose(&organismos).to_string(),
                rng.choose(&funciones).to_string(),
                imputado,
                period.to_string(),
                messy_amount(gross, &mut rng),
                messy_amount(gross, &mut rng),
                messy_amount(-deductions, &mut rng),
                messy_amount(net, &mut rng),
                messy_amount(contribution, &mut rng),
                rng.choose(&estados).to_string(),
            ];
            writer.write_record(&record).expect("Failed to write record");
            total_rows += 1;
        }
        writer.flush().expect("Failed to flush output file");
        println!("Wrote {}", path.display());
    }

    println!(
        "Wrote {} files, {total_rows} rows total to {}",
        periods.len(),
        output_dir.display()
    );
}
