//! Plot easing curves with gnuplot.
//!
//! Curves are picked by name on the command line, e.g.
//! `cargo run --example plots -- in_out_back out_bounce`.
//! Without arguments, all curves are plotted.

use ease_core::{ease, Curve, Ease, Eased};

fn main() {
    env_logger::init();

    let mut plots = Plots { plots: Vec::new() };

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        for &curve in Ease::ALL.iter() {
            plots.add(curve.name().to_owned(), ease(curve));
        }
    } else {
        for name in names {
            match name.parse::<Ease>() {
                Ok(curve) => plots.add(curve.to_string(), ease(curve)),
                Err(err) => log::error!("Skipping `{}`: {}", name, err),
            }
        }
    }

    if plots.plots.is_empty() {
        log::error!("Nothing to plot");
        return;
    }

    log::info!("Plotting {} curves", plots.plots.len());
    plots.show_gnuplot();
}

fn sample(n: usize, anim: Eased<impl Curve<T = f32>>) -> (Vec<f32>, Vec<f32>) {
    let mut ts = Vec::new();
    let mut vs = Vec::new();

    for i in 0..=n {
        let time = i as f32 / n as f32;
        let value = anim.eval(time);

        ts.push(time);
        vs.push(value);
    }

    (ts, vs)
}

struct Plot {
    name: String,
    ts: Vec<f32>,
    vs: Vec<f32>,
}

struct Plots {
    plots: Vec<Plot>,
}

impl Plots {
    fn add(&mut self, name: String, anim: Eased<impl Curve<T = f32>>) {
        let (ts, vs) = sample(100, anim);

        self.plots.push(Plot { name, ts, vs });
    }

    fn show_gnuplot(&self) {
        use gnuplot::{AxesCommon, Color, Figure};

        let mut figure = Figure::new();

        // Show plots in a square rows/columns layout
        let square_size = (self.plots.len() as f32).sqrt().ceil() as u32;

        for (i, plot) in self.plots.iter().enumerate() {
            figure
                .axes2d()
                .lines(&plot.ts, &plot.vs, &[Color("blue")])
                .set_title(&plot.name, &[])
                .set_x_label("progress", &[])
                .set_y_label("eased", &[])
                .set_pos_grid(square_size, square_size, i as u32);
        }

        if let Err(err) = figure.show() {
            log::error!("Failed to run gnuplot: {}", err);
        }
    }
}
