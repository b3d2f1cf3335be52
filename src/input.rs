//! # Módulo de Entrada Interactiva
//!
//! Lectura validada de valores desde una fuente de texto. El lector y el
//! escritor se inyectan para poder probar la captura con entradas fijas.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Lector de entradas con validación de rangos.
pub struct InputReader<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Acceso al escritor para imprimir mensajes fuera de un prompt.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Muestra un prompt y lee una línea sin espacios a los extremos.
    ///
    /// Devuelve `None` si la entrada ya terminó.
    pub fn read_optional_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt).context("No se pudo escribir el prompt")?;
        self.writer.flush().context("No se pudo vaciar la salida")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("No se pudo leer la entrada")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Igual que `read_optional_line`, pero el fin de la entrada es un error.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.read_optional_line(prompt)? {
            Some(line) => Ok(line),
            None => bail!("La entrada terminó inesperadamente"),
        }
    }

    /// Lee un entero en `[min, max]`, repitiendo el prompt hasta obtenerlo.
    ///
    /// Se rechazan entradas vacías, números con parte decimal, textos no
    /// numéricos y valores fuera de rango; cada caso muestra su mensaje.
    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64> {
        loop {
            let input = self.read_line(prompt)?;

            match parse_whole_number(&input) {
                Ok(value) if value < min || value > max => {
                    writeln!(
                        self.writer,
                        "Entrada inválida: el número debe estar entre {} y {}.",
                        min, max
                    )?;
                }
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.writer, "Entrada inválida: {}", message)?,
            }
        }
    }
}

/// Interpreta un texto como número entero.
///
/// Solo se acepta la notación entera ("4.0" y "1e1" no lo son). Un decimal
/// con parte fraccionaria recibe un mensaje propio; el resto de textos, el
/// mensaje genérico.
fn parse_whole_number(input: &str) -> std::result::Result<i64, &'static str> {
    if input.is_empty() {
        return Err("la entrada no puede estar vacía.");
    }

    if let Ok(value) = input.parse::<i64>() {
        return Ok(value);
    }

    match input.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() != 0.0 => {
            Err("por favor ingrese un número entero.")
        }
        _ => Err("por favor ingrese un número válido."),
    }
}
