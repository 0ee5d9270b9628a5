// ABOUTME: Embedded handlebars templates for generated stub comments
// ABOUTME: Holds the missing-operator comment block template

/// Name the missing-operator template is registered under.
pub const OP_MISSING: &str = "op_missing";

/// The stub comment emitted in place of an operator with no generated
/// implementation. Newlines live inside the loop bodies and block tags are
/// glued to surrounding text, so the rendered layout never depends on
/// standalone-line whitespace handling.
pub const OP_MISSING_TEMPLATE: &str = concat!(
    "/*\n",
    "    FIXME: {{op_type}} currently not supported, you have to fill up this section or it won't compile\n",
    "\n",
    "    Input Tensors:",
    "{{#each input_tensors}}\n        {{name}}, of type {{dtype}}{{/each}}\n",
    "\n",
    "    Output Tensors:",
    "{{#each outputs}}\n        {{name}} is of type {{dtype}} and should be named as {{var_name}}",
    "{{#if quant}}\n            quantization parameters:",
    "\n            - zero point: {{quant.zero_point.value}}, {{quant.zero_point.type_str}}",
    "\n            - scale: {{quant.scale.value}}, {{quant.scale.type_str}}",
    "\n            - is per tensor quantization: {{quant.is_per_tensor}}{{/if}}{{/each}}\n",
    "*/"
);
