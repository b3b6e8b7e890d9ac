use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rand::{SeedableRng, rngs::StdRng};
use rgb::RGB8;
use color_harmony::{GeneratorOptions, HarmonyGenerator, HarmonyType,
                    HslFormula, LockMask, Palette, RGBColor, SortStrategy};

type Err = Box<dyn Error>;

/// One swatch per color, labelled with its hex code, above a strip of
/// the same colors in grayscale.
fn swatches(fh: &mut impl Write, colors: &[RGB8], width: u32,
            label: &str) -> Result<(), Err> {
    writeln!(fh, "<div style=\"display: flex; align-items: flex-end\">")?;
    for &c in colors {
        let hex = c.to_color();
        let gray = c.to_gray().to_color();
        let ink = if hex.luminance() < 0.5 { "#FFFFFF" } else { "#000000" };
        writeln!(fh, "  <div style=\"width: {width}px\">\
                      <div style=\"height: 36px; background: {hex}; \
                      color: {ink}; font: 9px monospace\">{}</div>\
                      <div style=\"height: 8px; background: {gray}\"></div>\
                      </div>",
                 if width >= 50 { hex.to_string() } else { String::new() })?;
    }
    writeln!(fh, "  <span style=\"padding-left: 8px\">{label}</span>\n</div><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, p: &Palette, label: &str) -> Result<(), Err> {
    swatches(fh, &p.colors(), 60, label)
}

fn main() -> Result<(), Err> {
    let seed = match env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 2024,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut fh = BufWriter::new(File::create("harmony.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Color harmony (seed {seed})</title>\n\
                  </head>\n\
                  <body>")?;

    for (title, formula) in [("Harmonies", HslFormula::Legacy),
                             ("Harmonies (standard HSL)", HslFormula::Standard)] {
        writeln!(fh, "<h3>{title}</h3>")?;
        let gen = HarmonyGenerator::with_options(
            GeneratorOptions::new().hsl_formula(formula));
        for harmony in HarmonyType::ALL {
            let p = gen.generate(harmony, 0.1, None, None, &mut rng);
            palette(&mut fh, &p, harmony.name())?;
        }
    }

    writeln!(fh, "<h3>Locks (slots 0 and 2)</h3>")?;
    let gen = HarmonyGenerator::with_options(
        GeneratorOptions::new().distinct_threshold(18.));
    let locks = LockMask::new().lock(0).lock(2);
    let mut p = Palette::starter();
    palette(&mut fh, &p, "starter")?;
    for i in 1 ..= 4 {
        p = gen.regenerate(HarmonyType::Analogous, &p, &locks, &mut rng);
        palette(&mut fh, &p, &format!("regeneration {i}"))?;
    }

    writeln!(fh, "<h3>Sorting</h3>")?;
    let colors: Vec<RGB8> = (0 .. 4)
        .flat_map(|_| gen.generate(HarmonyType::Square, 0.3, None, None,
                                   &mut rng).colors::<RGB8>())
        .collect();
    for strategy in SortStrategy::ALL {
        swatches(&mut fh, &strategy.sort(colors.clone()), 20,
                 strategy.name())?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
