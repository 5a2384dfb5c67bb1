//! Program table: collects parsed function definitions into a name-keyed
//! mapping, enforcing uniqueness, reserved-name collisions, and the
//! existence of a zero-parameter `main`.

use std::collections::HashMap;

use cfs_par::{FunctionDef, Program};
use cfs_util::{reserved, CfsError, Symbol};

pub struct ProgramTable {
    functions: HashMap<Symbol, FunctionDef>,
}

impl ProgramTable {
    pub fn build(program: Program) -> Result<Self, CfsError> {
        let mut functions = HashMap::with_capacity(program.len());

        for func in program {
            if reserved::is_reserved(func.name.as_str()) {
                return Err(CfsError::program_at(
                    func.name_span.position(),
                    format!(
                        "function '{}' collides with a reserved host-engine symbol",
                        func.name
                    ),
                ));
            }
            if functions.contains_key(&func.name) {
                return Err(CfsError::program_at(
                    func.name_span.position(),
                    format!("duplicate function definition '{}'", func.name),
                ));
            }
            functions.insert(func.name, func);
        }

        let main_name = Symbol::intern("main");
        match functions.get(&main_name) {
            None => return Err(CfsError::program("program has no 'main' function")),
            Some(main) if !main.params.is_empty() => {
                return Err(CfsError::program_at(
                    main.name_span.position(),
                    "'main' must take no parameters",
                ))
            }
            Some(_) => {}
        }

        Ok(Self { functions })
    }

    pub fn get(&self, name: Symbol) -> Option<&FunctionDef> {
        self.functions.get(&name)
    }

    pub fn main(&self) -> &FunctionDef {
        self.functions
            .get(&Symbol::intern("main"))
            .expect("build() guarantees a zero-arg 'main'")
    }
}
