//! In-memory page used by the CLI and tests in place of a browser DOM.

use crate::domain::model::{FormFixture, FormId, InputFixture, InputId, PageFixture};
use crate::domain::ports::Document;
use crate::utils::error::{RentalError, Result};
use crate::utils::validation::validate_non_empty_string;

#[derive(Debug, Clone)]
struct InputElement {
    name: String,
    value: String,
    min: String,
    form: Option<FormId>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    forms: Vec<String>,
    inputs: Vec<InputElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a page in document order: each form's inputs, then the loose
    /// inputs. Change events in the fixture are not applied.
    pub fn from_fixture(page: &PageFixture) -> Result<Self> {
        let mut document = Self::new();

        for form in &page.forms {
            validate_non_empty_string("forms.id", &form.id)?;
            if document.form_by_id(&form.id).is_some() {
                return Err(RentalError::PageError {
                    message: format!("form '{}' is declared twice", form.id),
                });
            }
            let form_id = document.add_form(&form.id);
            for input in &form.inputs {
                validate_non_empty_string("forms.inputs.name", &input.name)?;
                let id = document.add_input(Some(form_id), &input.name, &input.value);
                document.set_min(id, &input.min);
            }
        }

        for input in &page.loose_inputs {
            validate_non_empty_string("loose_inputs.name", &input.name)?;
            let id = document.add_input(None, &input.name, &input.value);
            document.set_min(id, &input.min);
        }

        Ok(document)
    }

    /// Current state of the page, without events.
    pub fn to_fixture(&self) -> PageFixture {
        let snapshot = |element: &InputElement| InputFixture {
            name: element.name.clone(),
            value: element.value.clone(),
            min: element.min.clone(),
        };

        let forms = self
            .forms
            .iter()
            .enumerate()
            .map(|(index, id)| FormFixture {
                id: id.clone(),
                inputs: self
                    .inputs
                    .iter()
                    .filter(|input| input.form == Some(FormId(index)))
                    .map(snapshot)
                    .collect(),
            })
            .collect();

        let loose_inputs = self
            .inputs
            .iter()
            .filter(|input| input.form.is_none())
            .map(snapshot)
            .collect();

        PageFixture {
            forms,
            loose_inputs,
            events: Vec::new(),
        }
    }

    pub fn add_form(&mut self, id: &str) -> FormId {
        self.forms.push(id.to_string());
        FormId(self.forms.len() - 1)
    }

    pub fn add_input(&mut self, form: Option<FormId>, name: &str, value: &str) -> InputId {
        self.inputs.push(InputElement {
            name: name.to_string(),
            value: value.to_string(),
            min: String::new(),
            form,
        });
        InputId(self.inputs.len() - 1)
    }

    pub fn form_by_id(&self, id: &str) -> Option<FormId> {
        self.forms.iter().position(|f| f == id).map(FormId)
    }

    /// Resolves an input the way a change event names it: by form id, or
    /// among the loose inputs when no form is given.
    pub fn find_input(&self, form: Option<&str>, name: &str) -> Option<InputId> {
        let form = match form {
            Some(id) => Some(self.form_by_id(id)?),
            None => None,
        };
        self.inputs
            .iter()
            .position(|input| input.form == form && input.name == name)
            .map(InputId)
    }
}

impl Document for MemoryDocument {
    fn inputs_named(&self, name: &str) -> Vec<InputId> {
        self.inputs
            .iter()
            .enumerate()
            .filter(|(_, input)| input.name == name)
            .map(|(index, _)| InputId(index))
            .collect()
    }

    fn closest_form(&self, input: InputId) -> Option<FormId> {
        self.inputs.get(input.0)?.form
    }

    fn form_input(&self, form: FormId, name: &str) -> Option<InputId> {
        self.inputs
            .iter()
            .position(|input| input.form == Some(form) && input.name == name)
            .map(InputId)
    }

    fn value(&self, input: InputId) -> &str {
        self.inputs.get(input.0).map_or("", |i| i.value.as_str())
    }

    fn set_value(&mut self, input: InputId, value: &str) {
        if let Some(element) = self.inputs.get_mut(input.0) {
            element.value = value.to_string();
        }
    }

    fn min(&self, input: InputId) -> &str {
        self.inputs.get(input.0).map_or("", |i| i.min.as_str())
    }

    fn set_min(&mut self, input: InputId, min: &str) {
        if let Some(element) = self.inputs.get_mut(input.0) {
            element.min = min.to_string();
        }
    }
}
