use std::convert::Infallible;

/// Immediate-mode 2D target that a [`crate::Field`] draws onto.
pub trait Surface {
    type Error;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Fills a white circle centred on `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64)
        -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        opacity: f64,
    },
}

/// A [`Surface`] that keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    pub commands: Vec<DrawCommand>,
}

impl Recording {
    pub fn new() -> Recording {
        Recording::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
    }
}

impl Surface for Recording {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        opacity: f64,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            opacity,
        });
        Ok(())
    }
}
