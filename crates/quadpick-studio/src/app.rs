use quadpick_engine::coords::Viewport;
use quadpick_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use quadpick_engine::paint::Color;
use quadpick_pick::{HitMethod, HitReport};

use crate::commands::{commands_from_input, Outcome, Studio, StudioCommand};
use crate::config::StudioConfig;
use crate::square_renderer::SquareRenderer;

/// Glue between the engine runtime and the studio state.
pub struct SquareApp {
    config: StudioConfig,
    studio: Studio,
    renderer: SquareRenderer,
}

impl SquareApp {
    pub fn new(config: StudioConfig) -> Self {
        let initial = Viewport::new(
            config.runtime.initial_size.width as f32,
            config.runtime.initial_size.height as f32,
        );
        let studio = Studio::new(&config, initial);

        Self {
            config,
            studio,
            renderer: SquareRenderer::new(),
        }
    }

    fn apply(&mut self, window: &WindowCtx<'_>, outcome: Outcome) -> AppControl {
        match outcome {
            Outcome::Report(report) => {
                show_report(&report);
                window.set_title(&format!(
                    "{} | {} ({})",
                    self.config.runtime.title,
                    report.verdict(),
                    report.method
                ));
            }
            Outcome::MenuShown => {
                log::info!("menu open: Enter to return, Q to quit");
                window.set_title(&format!("{} | menu", self.config.runtime.title));
            }
            Outcome::MenuHidden => window.set_title(&self.config.runtime.title),
            Outcome::ClickConsumedByMenu => log::debug!("click ignored while the menu is open"),
            Outcome::MethodChanged(method) => log::info!("hit test method: {method}"),
            Outcome::Exit => return AppControl::Exit,
            Outcome::Nothing => {}
        }
        AppControl::Continue
    }

    fn scene_colors(&self) -> (Color, [f32; 4]) {
        if self.studio.menu_visible() {
            let dim = self.config.menu_dim;
            let k = 1.0 - dim.a;
            (self.config.clear_color.under(dim), [k, k, k, 1.0])
        } else {
            (self.config.clear_color, [1.0; 4])
        }
    }
}

impl App for SquareApp {
    fn on_start(&mut self, viewport: Viewport) {
        self.studio.handle(StudioCommand::Resize(viewport));
        log::info!(
            "click to hit-test ({}); 1/2 switch method, Esc opens the menu",
            self.studio.method()
        );
    }

    fn on_resize(&mut self, viewport: Viewport) -> AppControl {
        self.studio.handle(StudioCommand::Resize(viewport));
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for cmd in commands_from_input(ctx.input_frame) {
            let outcome = self.studio.handle(cmd);
            if self.apply(&ctx.window, outcome) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let (clear, tint) = self.scene_colors();
        let (renderer, studio) = (&mut self.renderer, &self.studio);

        ctx.render(clear, |rctx, target| {
            renderer.render(rctx, target, studio.camera(), studio.square(), tint);
        })
    }
}

/// Prints the report as a framed block, the desktop stand-in for a message box,
/// and logs the same block.
fn show_report(report: &HitReport) {
    let block = report_block(report);
    println!();
    println!("{block}");
    println!();

    log::info!("hit test report\n{block}");
}

fn report_block(report: &HitReport) -> String {
    let header = match report.method {
        HitMethod::ScreenSpace => "[HIT TEST] screen space",
        HitMethod::NdcSpace => "[HIT TEST] NDC space",
    };

    let mut block = format!("  {header}");
    for line in report.to_string().lines() {
        block.push_str("\n    ");
        block.push_str(line);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadpick_engine::coords::Vec2;
    use quadpick_engine::input::Key;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn scene_is_undimmed_without_menu() {
        let app = SquareApp::new(StudioConfig::default());
        let (clear, tint) = app.scene_colors();
        assert_eq!(clear, Color::from_premul(1.0, 1.0, 1.0, 0.0));
        assert_eq!(tint, [1.0; 4]);
    }

    #[test]
    fn open_menu_dims_clear_color_and_tint() {
        let mut app = SquareApp::new(StudioConfig::default());
        app.studio.handle(StudioCommand::KeyPressed(Key::Escape));

        let (clear, tint) = app.scene_colors();
        // 60% black over white with zero alpha.
        assert!(close(clear.r, 0.4) && close(clear.g, 0.4) && close(clear.b, 0.4));
        assert!(close(clear.a, 0.6));
        assert!(tint[..3].iter().all(|&k| close(k, 0.4)));
        assert_eq!(tint[3], 1.0);

        app.studio.handle(StudioCommand::KeyPressed(Key::Enter));
        assert_eq!(app.scene_colors().1, [1.0; 4]);
    }

    #[test]
    fn report_block_carries_every_report_line() {
        let mut studio = Studio::new(&StudioConfig::default(), Viewport::new(800.0, 600.0));
        let Outcome::Report(report) = studio.handle(StudioCommand::Click(Vec2::new(400.0, 300.0)))
        else {
            panic!("click did not produce a report");
        };

        let block = report_block(&report);
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "  [HIT TEST] screen space");
        assert_eq!(lines[1], "    Inside square");
        assert!(lines[2].starts_with("    Length to the nearest vertex from mouse click position: "));
        assert_eq!(lines[3], "    Mouse: 400; 300");
        assert_eq!(lines[4], "    Top left: 200; 150");
        assert_eq!(lines.len(), 5);
    }
}
