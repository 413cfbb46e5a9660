//! # File Templates
//!
//! Source text for every scaffolded file. Per-variant styling is generated
//! from [`VariantStyle::all`] into the `__VARIANTS__` slot, so each component
//! carries one variant map instead of a hand-written block per color.
//!
//! Rendering is pure: the same binary always produces byte-identical output.

use crate::style::{ColorPreset, VariantStyle};

const VARIANTS_SLOT: &str = "__VARIANTS__";

/// Render a `const variants = { ... } as const;` map.
fn variant_map(classes: impl Fn(&VariantStyle) -> String) -> String {
    let mut out = String::from("const variants = {\n");
    for variant in VariantStyle::all() {
        out.push_str(&format!("  {}: \"{}\",\n", variant.key, classes(variant)));
    }
    out.push_str("} as const;");
    out
}

fn fill(template: &str, classes: impl Fn(&VariantStyle) -> String) -> String {
    template.replace(VARIANTS_SLOT, &variant_map(classes))
}

// ---------------------------------------------------------------------------
// Baseline files written by `init`
// ---------------------------------------------------------------------------

const UTILS_TS: &str = r#"import { clsx, type ClassValue } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}

export function isValidHexColor(value: string): boolean {
  return /^#[0-9A-Fa-f]{6}$/.test(value);
}
"#;

pub fn utils_ts() -> String {
    UTILS_TS.to_string()
}

pub fn globals_css() -> String {
    let mut out = String::from("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n:root {\n");
    for variant in VariantStyle::all() {
        out.push_str(&format!("  --neon-{}: {};\n", variant.key, variant.primary));
        out.push_str(&format!(
            "  --neon-{}-glow: {};\n",
            variant.key,
            variant.shadow_token()
        ));
    }
    out.push_str("}\n\n");
    out.push_str(
        "@keyframes neon-pulse {\n  0%, 100% { opacity: 1; }\n  50% { opacity: 0.7; }\n}\n\n",
    );
    out.push_str(".neon-pulse {\n  animation: neon-pulse 2s ease-in-out infinite;\n}\n\n");
    out.push_str(
        "@media (prefers-reduced-motion: reduce) {\n  *, *::before, *::after {\n    animation: none !important;\n    transition: none !important;\n  }\n}\n",
    );
    out
}

pub fn tailwind_config_ts() -> String {
    let mut out = String::from(
        "import type { Config } from \"tailwindcss\";\n\nconst config: Config = {\n  content: [\"./app/**/*.{ts,tsx}\", \"./components/**/*.{ts,tsx}\"],\n  theme: {\n    extend: {\n      colors: {\n        neon: {\n",
    );
    for preset in ColorPreset::all() {
        let key = preset.label.to_lowercase().replace(' ', "-");
        out.push_str(&format!("          \"{}\": \"{}\",\n", key, preset.hex));
    }
    out.push_str("        },\n      },\n    },\n  },\n  plugins: [],\n};\n\nexport default config;\n");
    out
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

const BUTTON_TSX: &str = r#"import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface ButtonProps extends React.ButtonHTMLAttributes<HTMLButtonElement> {
  variant?: keyof typeof variants;
  size?: "sm" | "md" | "lg";
}

const sizes = { sm: "h-8 px-3 text-xs", md: "h-10 px-4 text-sm", lg: "h-12 px-6 text-base" };

export const Button = React.forwardRef<HTMLButtonElement, ButtonProps>(
  ({ className, variant = "cyan", size = "md", ...props }, ref) => (
    <button
      ref={ref}
      className={cn(
        "inline-flex items-center justify-center rounded-md font-semibold uppercase tracking-wider transition-shadow disabled:opacity-50",
        variants[variant],
        sizes[size],
        className,
      )}
      {...props}
    />
  ),
);
Button.displayName = "Button";
"#;

pub fn button_tsx() -> String {
    fill(BUTTON_TSX, VariantStyle::solid_classes)
}

const BADGE_TSX: &str = r#"import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface BadgeProps extends React.HTMLAttributes<HTMLSpanElement> {
  variant?: keyof typeof variants;
  pulse?: boolean;
}

export function Badge({ className, variant = "cyan", pulse = false, ...props }: BadgeProps) {
  return (
    <span
      className={cn(
        "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold",
        variants[variant],
        pulse && "neon-pulse",
        className,
      )}
      {...props}
    />
  );
}
"#;

pub fn badge_tsx() -> String {
    fill(BADGE_TSX, VariantStyle::outline_classes)
}

const CARD_TSX: &str = r#"import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface CardProps extends React.HTMLAttributes<HTMLDivElement> {
  variant?: keyof typeof variants;
}

export function Card({ className, variant = "cyan", ...props }: CardProps) {
  return (
    <div
      className={cn("rounded-xl border bg-black/60 p-6 backdrop-blur", variants[variant], className)}
      {...props}
    />
  );
}

export function CardHeader({ className, ...props }: React.HTMLAttributes<HTMLDivElement>) {
  return <div className={cn("mb-4 space-y-1", className)} {...props} />;
}

export function CardTitle({ className, ...props }: React.HTMLAttributes<HTMLHeadingElement>) {
  return <h3 className={cn("text-lg font-bold tracking-wide", className)} {...props} />;
}

export function CardContent({ className, ...props }: React.HTMLAttributes<HTMLDivElement>) {
  return <div className={cn("text-sm text-white/80", className)} {...props} />;
}
"#;

pub fn card_tsx() -> String {
    fill(CARD_TSX, VariantStyle::outline_classes)
}

const INPUT_TSX: &str = r#""use client";

import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface InputProps
  extends Omit<React.InputHTMLAttributes<HTMLInputElement>, "value" | "defaultValue" | "onChange"> {
  variant?: keyof typeof variants;
  value?: string;
  defaultValue?: string;
  onValueChange?: (value: string) => void;
}

export function Input({
  className,
  variant = "cyan",
  value,
  defaultValue = "",
  onValueChange,
  maxLength,
  ...props
}: InputProps) {
  const [internal, setInternal] = React.useState(defaultValue);
  const isControlled = value !== undefined;
  const current = isControlled ? value : internal;

  return (
    <input
      className={cn(
        "h-10 w-full rounded-md border bg-black/70 px-3 text-sm outline-none placeholder:text-white/40",
        variants[variant],
        className,
      )}
      value={current}
      maxLength={maxLength}
      onChange={(event) => {
        const next = maxLength ? event.target.value.slice(0, maxLength) : event.target.value;
        setInternal(next);
        onValueChange?.(next);
      }}
      {...props}
    />
  );
}
"#;

pub fn input_tsx() -> String {
    fill(INPUT_TSX, VariantStyle::outline_classes)
}

const TEXTAREA_TSX: &str = r#""use client";

import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface TextareaProps
  extends Omit<React.TextareaHTMLAttributes<HTMLTextAreaElement>, "value" | "defaultValue" | "onChange"> {
  variant?: keyof typeof variants;
  value?: string;
  defaultValue?: string;
  onValueChange?: (value: string) => void;
}

export function Textarea({
  className,
  variant = "cyan",
  value,
  defaultValue = "",
  onValueChange,
  maxLength,
  rows = 4,
  ...props
}: TextareaProps) {
  const [internal, setInternal] = React.useState(defaultValue);
  const isControlled = value !== undefined;
  const current = isControlled ? value : internal;

  return (
    <div className="relative">
      <textarea
        className={cn(
          "w-full resize-y rounded-md border bg-black/70 p-3 text-sm outline-none",
          variants[variant],
          className,
        )}
        rows={rows}
        value={current}
        maxLength={maxLength}
        onChange={(event) => {
          const next = maxLength ? event.target.value.slice(0, maxLength) : event.target.value;
          setInternal(next);
          onValueChange?.(next);
        }}
        {...props}
      />
      {maxLength ? (
        <span className="absolute bottom-2 right-3 text-xs text-white/50">
          {current.length}/{maxLength}
        </span>
      ) : null}
    </div>
  );
}
"#;

pub fn textarea_tsx() -> String {
    fill(TEXTAREA_TSX, VariantStyle::outline_classes)
}

const SWITCH_TSX: &str = r#""use client";

import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface SwitchProps {
  variant?: keyof typeof variants;
  checked?: boolean;
  defaultChecked?: boolean;
  onCheckedChange?: (checked: boolean) => void;
  disabled?: boolean;
  label?: string;
}

export function Switch({
  variant = "cyan",
  checked,
  defaultChecked = false,
  onCheckedChange,
  disabled,
  label,
}: SwitchProps) {
  const [internal, setInternal] = React.useState(defaultChecked);
  const isControlled = checked !== undefined;
  const on = isControlled ? checked : internal;

  const toggle = () => {
    if (disabled) return;
    setInternal(!on);
    onCheckedChange?.(!on);
  };

  return (
    <button
      type="button"
      role="switch"
      aria-checked={on}
      aria-label={label}
      disabled={disabled}
      onClick={toggle}
      className={cn(
        "relative inline-flex h-6 w-11 items-center rounded-full border transition-colors disabled:opacity-50",
        on ? variants[variant] : "border-white/20 bg-white/10",
      )}
    >
      <span
        className={cn(
          "inline-block h-4 w-4 rounded-full bg-white transition-transform",
          on ? "translate-x-6" : "translate-x-1",
        )}
      />
    </button>
  );
}
"#;

pub fn switch_tsx() -> String {
    fill(SWITCH_TSX, VariantStyle::solid_classes)
}

const RADIO_TSX: &str = r#""use client";

import * as React from "react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface RadioOption {
  value: string;
  label: string;
}

export interface RadioGroupProps {
  name: string;
  options: RadioOption[];
  variant?: keyof typeof variants;
  value?: string;
  defaultValue?: string;
  onValueChange?: (value: string) => void;
}

export function RadioGroup({
  name,
  options,
  variant = "cyan",
  value,
  defaultValue,
  onValueChange,
}: RadioGroupProps) {
  const [internal, setInternal] = React.useState(defaultValue);
  const isControlled = value !== undefined;
  const selected = isControlled ? value : internal;

  return (
    <div role="radiogroup" className="flex flex-col gap-2">
      {options.map((option) => (
        <label key={option.value} className="flex cursor-pointer items-center gap-2 text-sm">
          <input
            type="radio"
            name={name}
            value={option.value}
            checked={selected === option.value}
            onChange={() => {
              setInternal(option.value);
              onValueChange?.(option.value);
            }}
            className="sr-only"
          />
          <span
            className={cn(
              "h-4 w-4 rounded-full border",
              selected === option.value ? variants[variant] : "border-white/30",
            )}
          />
          {option.label}
        </label>
      ))}
    </div>
  );
}
"#;

pub fn radio_tsx() -> String {
    fill(RADIO_TSX, VariantStyle::solid_classes)
}

const DROPDOWN_TSX: &str = r#""use client";

import * as React from "react";
import { ChevronDown, Check } from "lucide-react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface DropdownOption {
  value: string;
  label: string;
  disabled?: boolean;
}

interface BaseProps {
  options: DropdownOption[];
  variant?: keyof typeof variants;
  placeholder?: string;
}

export type DropdownProps = BaseProps &
  (
    | { multiple?: false; value?: string; defaultValue?: string; onValueChange?: (value: string) => void }
    | { multiple: true; value?: string[]; defaultValue?: string[]; onValueChange?: (value: string[]) => void }
  );

export function Dropdown(props: DropdownProps) {
  const { options, variant = "cyan", placeholder = "Select..." } = props;
  const [open, setOpen] = React.useState(false);
  const [internal, setInternal] = React.useState<string | string[] | undefined>(props.defaultValue);
  const isControlled = props.value !== undefined;
  const current = isControlled ? props.value : internal;

  const isSelected = (value: string) =>
    Array.isArray(current) ? current.includes(value) : current === value;

  const choose = (value: string) => {
    if (props.multiple) {
      const set = Array.isArray(current) ? current : [];
      const next = set.includes(value) ? set.filter((v) => v !== value) : [...set, value];
      setInternal(next);
      props.onValueChange?.(next);
    } else {
      setInternal(value);
      props.onValueChange?.(value);
      setOpen(false);
    }
  };

  const summary = options.filter((o) => isSelected(o.value)).map((o) => o.label).join(", ");

  return (
    <div className="relative w-56">
      <button
        type="button"
        onClick={() => setOpen(!open)}
        className={cn("flex w-full items-center justify-between rounded-md border px-3 py-2 text-sm", variants[variant])}
      >
        {summary || placeholder}
        <ChevronDown className="h-4 w-4" />
      </button>
      {open ? (
        <ul role="listbox" className="absolute z-10 mt-1 w-full rounded-md border border-white/20 bg-black/90 py-1">
          {options.map((option) => (
            <li
              key={option.value}
              role="option"
              aria-selected={isSelected(option.value)}
              aria-disabled={option.disabled}
              onClick={() => !option.disabled && choose(option.value)}
              className="flex cursor-pointer items-center justify-between px-3 py-1.5 text-sm hover:bg-white/10 aria-disabled:opacity-40"
            >
              {option.label}
              {isSelected(option.value) ? <Check className="h-4 w-4" /> : null}
            </li>
          ))}
        </ul>
      ) : null}
    </div>
  );
}
"#;

pub fn dropdown_tsx() -> String {
    fill(DROPDOWN_TSX, VariantStyle::outline_classes)
}

const MODAL_TSX: &str = r#""use client";

import * as React from "react";
import { X } from "lucide-react";
import { cn } from "@/lib/utils";

__VARIANTS__

export interface ModalProps {
  title: string;
  variant?: keyof typeof variants;
  open?: boolean;
  defaultOpen?: boolean;
  onOpenChange?: (open: boolean) => void;
  closeOnEscape?: boolean;
  children?: React.ReactNode;
}

export function Modal({
  title,
  variant = "cyan",
  open,
  defaultOpen = false,
  onOpenChange,
  closeOnEscape = true,
  children,
}: ModalProps) {
  const [internal, setInternal] = React.useState(defaultOpen);
  const isControlled = open !== undefined;
  const visible = isControlled ? open : internal;

  const setVisible = React.useCallback(
    (next: boolean) => {
      setInternal(next);
      onOpenChange?.(next);
    },
    [onOpenChange],
  );

  React.useEffect(() => {
    if (!visible || !closeOnEscape) return;
    const onKey = (event: KeyboardEvent) => {
      if (event.key === "Escape") setVisible(false);
    };
    window.addEventListener("keydown", onKey);
    return () => window.removeEventListener("keydown", onKey);
  }, [visible, closeOnEscape, setVisible]);

  if (!visible) return null;

  return (
    <div className="fixed inset-0 z-50 flex items-center justify-center bg-black/70" onClick={() => setVisible(false)}>
      <div
        role="dialog"
        aria-modal="true"
        aria-label={title}
        onClick={(event) => event.stopPropagation()}
        className={cn("w-full max-w-md rounded-xl border bg-black p-6", variants[variant])}
      >
        <div className="mb-4 flex items-center justify-between">
          <h2 className="text-lg font-bold">{title}</h2>
          <button type="button" aria-label="Close" onClick={() => setVisible(false)}>
            <X className="h-4 w-4" />
          </button>
        </div>
        {children}
      </div>
    </div>
  );
}
"#;

pub fn modal_tsx() -> String {
    fill(MODAL_TSX, VariantStyle::outline_classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component_renders() -> Vec<(&'static str, String)> {
        vec![
            ("button", button_tsx()),
            ("badge", badge_tsx()),
            ("card", card_tsx()),
            ("input", input_tsx()),
            ("textarea", textarea_tsx()),
            ("switch", switch_tsx()),
            ("radio", radio_tsx()),
            ("dropdown", dropdown_tsx()),
            ("modal", modal_tsx()),
        ]
    }

    #[test]
    fn test_slot_is_always_filled() {
        for (name, source) in component_renders() {
            assert!(!source.contains(VARIANTS_SLOT), "{name} left the slot unfilled");
            for variant in VariantStyle::all() {
                assert!(
                    source.contains(&format!("  {}: \"", variant.key)),
                    "{name} is missing variant {}",
                    variant.key
                );
            }
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        assert_eq!(button_tsx(), button_tsx());
        assert_eq!(globals_css(), globals_css());
    }

    #[test]
    fn test_globals_css_has_single_reduced_motion_query() {
        let css = globals_css();
        assert_eq!(css.matches("prefers-reduced-motion").count(), 1);
        assert!(css.contains("--neon-cyan: #00F0FF;"));
    }

    #[test]
    fn test_tailwind_config_lists_presets() {
        let config = tailwind_config_ts();
        assert!(config.contains("\"neon-cyan\": \"#00F0FF\""));
        assert!(config.contains("\"ghost-white\": \"#F5F5FA\""));
    }

    #[test]
    fn test_utils_exports_cn() {
        assert!(utils_ts().contains("export function cn"));
    }
}
