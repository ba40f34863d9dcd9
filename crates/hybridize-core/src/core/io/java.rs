use crate::core::io::traits::StructureWriter;
use crate::core::models::structure::{AtomEntry, StructureDescription};
use std::io::{self, Write};
use thiserror::Error;

const DEFAULT_LIBRARY_PACKAGE: &str = "net.willware.eurydice";
const DEFAULT_PACKAGE: &str = "net.willware.eurydice.library";
const DEFAULT_CLASS_NAME: &str = "ImportedStructure";
const SUPERCLASS: &str = "NanocadStyleStructure";
const DEFAULT_PRECISION: usize = 6;
const MAX_PRECISION: usize = 15;

/// Continuation indent that lines `new Vector(...)` up under `new <Element>(...)`.
const CLASS_ARGUMENT_INDENT: &str = "\n                ";
const CLASS_BODY_INDENT: &str = "        ";

#[derive(Debug, Error)]
pub enum JavaSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid Java output option: {0}")]
    InvalidOption(String),
}

/// How much of the Java source to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JavaStyle {
    /// A complete compilation unit: package, imports, and a class whose constructor
    /// builds the structure.
    #[default]
    Class,
    /// Only the `addAtom`/`addBond` statements, one per line.
    Statements,
}

/// Options controlling the generated Java source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaOptions {
    pub style: JavaStyle,
    /// Root package of the structure-builder library (`Atom`, `Vector`, element classes).
    pub library_package: String,
    /// Package of the generated class.
    pub package: String,
    pub class_name: String,
    /// Javadoc text for the generated class.
    pub description: Option<String>,
    /// Digits after the decimal point for coordinates.
    pub precision: usize,
}

impl Default for JavaOptions {
    fn default() -> Self {
        Self {
            style: JavaStyle::default(),
            library_package: DEFAULT_LIBRARY_PACKAGE.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            description: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl JavaOptions {
    /// Checks that the options produce compilable Java.
    ///
    /// # Errors
    ///
    /// Returns [`JavaSourceError::InvalidOption`] if the class name or a package is not a
    /// valid Java identifier path, if the description would close the Javadoc comment,
    /// or if the precision is out of range.
    pub fn validate(&self) -> Result<(), JavaSourceError> {
        if !is_java_identifier(&self.class_name) {
            return Err(JavaSourceError::InvalidOption(format!(
                "class name '{}' is not a Java identifier",
                self.class_name
            )));
        }
        for (label, package) in [
            ("package", &self.package),
            ("library package", &self.library_package),
        ] {
            if !package.split('.').all(is_java_identifier) {
                return Err(JavaSourceError::InvalidOption(format!(
                    "{} '{}' is not a dotted sequence of Java identifiers",
                    label, package
                )));
            }
        }
        if let Some(description) = &self.description {
            if description.contains("*/") {
                return Err(JavaSourceError::InvalidOption(
                    "description must not contain '*/'".to_string(),
                ));
            }
        }
        if self.precision > MAX_PRECISION {
            return Err(JavaSourceError::InvalidOption(format!(
                "precision {} exceeds the maximum of {}",
                self.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

const JAVA_RESERVED_WORDS: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import",
    "instanceof", "int", "interface", "long", "native", "new", "null", "package",
    "private", "protected", "public", "return", "short", "static", "strictfp", "super",
    "switch", "synchronized", "this", "throw", "throws", "transient", "true", "try",
    "void", "volatile", "while",
];

fn is_java_identifier(s: &str) -> bool {
    if JAVA_RESERVED_WORDS.contains(&s) || s == "_" {
        return false;
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Renders a structure description as construction calls for the structure builder.
///
/// Each atom becomes `addAtom(new <Element>(Atom.<HYB>), new Vector(x, y, z));`, except
/// hydrogen, which is created as `new Hydrogen()` without a qualifier. Bonds follow as
/// `addBond(i, j);` in the order they appear in the description.
#[derive(Debug, Clone, Default)]
pub struct JavaSource {
    options: JavaOptions,
}

impl JavaSource {
    /// Creates a writer after validating the options.
    ///
    /// # Errors
    ///
    /// Returns [`JavaSourceError::InvalidOption`] if [`JavaOptions::validate`] fails.
    pub fn new(options: JavaOptions) -> Result<Self, JavaSourceError> {
        options.validate()?;
        Ok(Self { options })
    }

    fn atom_statement(&self, atom: &AtomEntry, argument_separator: &str) -> String {
        let constructor = match atom.hybridization {
            Some(hyb) => format!("new {}(Atom.{})", atom.element.name(), hyb),
            None => format!("new {}()", atom.element.name()),
        };
        let p = self.options.precision;
        format!(
            "addAtom({},{}new Vector({:.*}, {:.*}, {:.*}));",
            constructor,
            argument_separator,
            p,
            atom.position.x,
            p,
            atom.position.y,
            p,
            atom.position.z
        )
    }

    fn write_statements(
        &self,
        description: &StructureDescription,
        indent: &str,
        argument_separator: &str,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        for atom in &description.atoms {
            writeln!(
                writer,
                "{}{}",
                indent,
                self.atom_statement(atom, argument_separator)
            )?;
        }
        for bond in &description.bonds {
            writeln!(writer, "{}addBond({}, {});", indent, bond.i, bond.j)?;
        }
        Ok(())
    }

    fn write_class(
        &self,
        description: &StructureDescription,
        writer: &mut impl Write,
    ) -> io::Result<()> {
        let opts = &self.options;
        let lib = &opts.library_package;

        writeln!(writer, "/**")?;
        writeln!(writer, " * {}.java", opts.class_name)?;
        writeln!(
            writer,
            " * Generated by hybridize {}. Do not edit by hand.",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(writer, " */")?;
        writeln!(writer)?;
        writeln!(writer, "package {};", opts.package)?;
        writeln!(writer)?;

        if description.has_qualified_atoms() {
            writeln!(writer, "import {}.core.Atom;", lib)?;
        }
        for element in description.elements() {
            writeln!(writer, "import {}.elements.{};", lib, element.name())?;
        }
        writeln!(writer, "import {}.math.Vector;", lib)?;
        writeln!(writer, "import {}.nanocad.{};", lib, SUPERCLASS)?;
        writeln!(writer)?;

        writeln!(writer, "/**")?;
        let class_doc = opts
            .description
            .as_deref()
            .unwrap_or("Structure imported from a PDB coordinate file.");
        for line in class_doc.lines() {
            writeln!(writer, " * {}", line.trim_end())?;
        }
        writeln!(writer, " */")?;
        writeln!(
            writer,
            "public class {} extends {} {{",
            opts.class_name, SUPERCLASS
        )?;
        writeln!(writer)?;
        writeln!(writer, "    /**")?;
        writeln!(writer, "     * Constructor")?;
        writeln!(writer, "     */")?;
        writeln!(writer, "    public {}() {{", opts.class_name)?;
        self.write_statements(description, CLASS_BODY_INDENT, CLASS_ARGUMENT_INDENT, writer)?;
        writeln!(writer, "    }}")?;
        writeln!(writer, "}}")?;
        Ok(())
    }
}

impl StructureWriter for JavaSource {
    type Error = JavaSourceError;

    fn write_to(
        &self,
        description: &StructureDescription,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        match self.options.style {
            JavaStyle::Class => self.write_class(description, writer)?,
            JavaStyle::Statements => self.write_statements(description, "", " ", writer)?,
        }
        Ok(())
    }
}
