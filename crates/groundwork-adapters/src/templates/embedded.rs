//! Built-in template assets compiled into the binary.
//!
//! Used when no template directory is configured, so a bare install of the
//! tool still produces a useful project: a README, an MIT license, and a
//! Python-flavored `.gitignore`.

use groundwork_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateAsset,
    error::GroundworkResult,
};

const README: &str = "\
# [project_name]

Created on [date].

## Setup

```sh
cd [project_name]
source .venv/bin/activate
```
";

const LICENSE: &str = "\
MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const GITIGNORE: &str = "\
.venv/
__pycache__/
*.py[cod]
dist/
build/
*.egg-info/
";

/// The built-in assets, as (template file name, content) pairs, already in
/// output-name order.
const ASSETS: [(&str, &str); 3] = [
    (".gitignore.template", GITIGNORE),
    ("LICENSE.template", LICENSE),
    ("README.md.template", README),
];

/// Template source serving the compiled-in asset set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn discover(&self) -> GroundworkResult<Vec<TemplateAsset>> {
        Ok(ASSETS
            .iter()
            .map(|(name, _)| {
                let output = name
                    .strip_suffix(".template")
                    .expect("built-in asset names carry the template suffix");
                TemplateAsset::with_output_name(format!("builtin:{name}"), output)
            })
            .collect())
    }

    fn read(&self, asset: &TemplateAsset) -> GroundworkResult<String> {
        ASSETS
            .iter()
            .find(|(name, _)| {
                name.strip_suffix(".template") == Some(asset.output_name())
            })
            .map(|(_, content)| content.to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateRead {
                    path: asset.source().to_path_buf(),
                    reason: "unknown built-in asset".into(),
                }
                .into()
            })
    }
}
