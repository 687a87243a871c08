use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::{
  CodeMetadata, CodeWriter, Emit,
  literal::value_expr,
  models::write_namespace_imports,
  types::{quote_string, type_expr},
};
use crate::generator::ast::{ArgValue, ClientDef, MethodDef};

const RUNTIME_IMPORT: &str = r#"import { Schema, Validator } from "jsonschema";"#;

const RUNTIME_TYPES: &str = r#"type Scalar = number | boolean | string;
type Parameter = Scalar | Array<Scalar> | null | undefined;
type ResponseSchemas = { [statusKey: string]: Schema | null };
type DispatchResult = { kind: string; value: unknown };"#;

/// Fixed members of the client class, at class-body indentation.
const RUNTIME_MEMBERS: &str = r#"readonly validator: Validator = new Validator();

constructor(baseUrl?: string) {
  if (baseUrl !== undefined) this.baseUrl = baseUrl;
}

removeNulls(instance: unknown, property: string): void {
  if (instance === null || typeof instance !== "object") return;
  const record = instance as { [key: string]: unknown };
  const value = record[property];
  if (value === null || value === undefined) {
    delete record[property];
  }
}

schemaKey(status: number, responseSchemas: ResponseSchemas): string | undefined {
  const exact = status.toString();
  if (exact in responseSchemas) return exact;
  const range = `${exact.charAt(0)}XX`;
  if (range in responseSchemas) return range;
  if ("default" in responseSchemas) return "default";
  return undefined;
}

async performRequest(
  method: string,
  path: string,
  pathParams: { [key: string]: Parameter },
  headerParams: { [key: string]: Parameter },
  queryParams: { [key: string]: Parameter },
  body: unknown,
  responseSchemas: ResponseSchemas,
): Promise<DispatchResult> {
  const requestUrl = new URL(this.baseUrl);
  const replacedPath = Object.entries(pathParams).reduce((url, [key, value]) => {
    if (value === undefined || value === null) return url;
    return url.replace(`{${key}}`, encodeURIComponent(value.toString()));
  }, path);
  requestUrl.pathname = requestUrl.pathname.replace(/\/$/, "") + replacedPath;

  for (const [key, value] of Object.entries(queryParams)) {
    if (value === undefined || value === null) continue;
    for (const item of Array.isArray(value) ? value : [value]) {
      requestUrl.searchParams.append(key, item.toString());
    }
  }

  const headers: Array<[string, string]> = [];
  for (const [name, value] of Object.entries(headerParams)) {
    if (value !== undefined && value !== null) headers.push([name, value.toString()]);
  }
  if (body !== null) headers.push(["Content-Type", "application/json"]);

  const response = await fetch(requestUrl.toString(), {
    method,
    headers,
    ...(body !== null ? { body: JSON.stringify(body) } : {}),
  });
  const text = await response.text();
  const kind = this.schemaKey(response.status, responseSchemas);
  const schema = kind === undefined ? undefined : responseSchemas[kind];
  if (kind === undefined || schema === undefined || schema === null) {
    throw new Error(`Response status ${response.status} does not have a schema defined, body:\n${text}`);
  }

  let value: unknown;
  try {
    value = text.length > 0 ? JSON.parse(text) : null;
  } catch {
    throw new Error(`Response with status ${response.status} is not valid JSON, body:\n${text}`);
  }

  const validation = this.validator.validate(value, schema, {
    allowUnknownAttributes: true,
    preValidateProperty: (instance: unknown, property: string) => this.removeNulls(instance, property),
  });
  if (!validation.valid) {
    throw new Error(`Failed to validate schema of response with status ${response.status} and body:\n${text}`);
  }
  return { kind, value };
}"#;

const MODELS_MODULE_DIR: &str = "./models";

/// The client class together with the header it is emitted under.
pub(crate) struct ClientFile<'a> {
  pub(crate) metadata: &'a CodeMetadata,
  pub(crate) client: &'a ClientDef,
}

impl ClientFile<'_> {
  fn referenced_namespaces(&self) -> BTreeSet<&str> {
    let mut namespaces = BTreeSet::new();
    for method in &self.client.methods {
      for param in &method.params {
        param.type_node.collect_namespaces(&mut namespaces);
      }
      method.response_type.collect_namespaces(&mut namespaces);
    }
    namespaces
  }
}

impl Emit for ClientFile<'_> {
  fn emit(&self, out: &mut CodeWriter) {
    self.metadata.write_header(out);
    out.blank();
    out.line(RUNTIME_IMPORT);
    let namespaces = self.referenced_namespaces();
    if namespaces.is_empty() {
      out.blank();
    }
    write_namespace_imports(out, namespaces, MODELS_MODULE_DIR);
    out.lines(RUNTIME_TYPES);
    out.blank();

    out.line("export class Client {");
    out.indent();
    out.line(&format!(
      "readonly baseUrl: string = {};",
      quote_string(&self.client.base_url)
    ));
    out.lines(RUNTIME_MEMBERS);
    for method in &self.client.methods {
      out.blank();
      method.emit(out);
    }
    out.dedent();
    out.line("}");
  }
}

fn arg_expr(arg: ArgValue) -> &'static str {
  match arg {
    ArgValue::Param(name) => name,
    ArgValue::EmptyObject => "{}",
    ArgValue::Null => "null",
  }
}

impl Emit for MethodDef {
  fn emit(&self, out: &mut CodeWriter) {
    out.docs(&self.docs, self.deprecated);

    let level = out.level();
    let params: Vec<String> = self
      .params
      .iter()
      .map(|param| format!("{}: {}", param.name, type_expr(&param.type_node, level)))
      .collect();
    out.line(&format!(
      "{}({}): {} {{",
      self.name,
      params.join(", "),
      type_expr(&self.return_type(), level)
    ));

    out.indent();
    let mut args = vec![
      quote_string(self.call.method.as_ref()),
      quote_string(&self.call.path),
    ];
    args.extend(self.call.args().into_iter().map(|arg| arg_expr(arg).to_string()));
    let schemas: Map<String, Value> = self
      .call
      .response_schemas
      .iter()
      .map(|(status, schema)| (status.clone(), schema.clone()))
      .collect();
    args.push(value_expr(&Value::Object(schemas), out.level()));

    out.line(&format!(
      "return this.performRequest({}).then((response) => response as {});",
      args.join(", "),
      type_expr(&self.response_type, out.level())
    ));
    out.dedent();
    out.line("}");
  }
}
